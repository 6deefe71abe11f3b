//! Text corpus for word-frequency analysis.

use std::collections::HashMap;

use serde::Serialize;

use crate::enrich::EnrichedRecord;

/// All message bodies joined into one text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "text")]
pub enum Corpus {
    /// Bodies joined with single spaces.
    Text(String),
    /// There was no text to join.
    Empty,
}

/// How often one word occurs in a corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

impl Corpus {
    /// Returns `true` for [`Corpus::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Corpus::Empty)
    }

    /// The corpus text; empty string for [`Corpus::Empty`].
    pub fn as_str(&self) -> &str {
        match self {
            Corpus::Text(text) => text,
            Corpus::Empty => "",
        }
    }

    /// The `n` most frequent words, most frequent first.
    ///
    /// Words are lowercased and stripped of surrounding punctuation; tokens
    /// that are only punctuation are ignored. Ties keep first-appearance order.
    ///
    /// ```
    /// use chatlens::core::corpus::Corpus;
    ///
    /// let corpus = Corpus::Text("Hi! hi, bob. Bob? hello".to_string());
    /// let top = corpus.most_common_words(2);
    /// assert_eq!(top[0].word, "hi");
    /// assert_eq!(top[0].count, 2);
    /// assert_eq!(top[1].word, "bob");
    /// ```
    pub fn most_common_words(&self, n: usize) -> Vec<WordCount> {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut counts: Vec<WordCount> = Vec::new();

        for token in self.as_str().split_whitespace() {
            let word = token
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase();
            if word.is_empty() {
                continue;
            }
            match index.get(&word) {
                Some(&i) => counts[i].count += 1,
                None => {
                    index.insert(word.clone(), counts.len());
                    counts.push(WordCount { word, count: 1 });
                }
            }
        }

        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts.truncate(n);
        counts
    }
}

/// Joins every body with a single space.
///
/// Returns [`Corpus::Empty`] when the result would be empty or whitespace-only.
pub fn build_corpus(records: &[EnrichedRecord]) -> Corpus {
    let text = records
        .iter()
        .map(EnrichedRecord::body)
        .collect::<Vec<_>>()
        .join(" ");

    if text.trim().is_empty() {
        Corpus::Empty
    } else {
        Corpus::Text(text)
    }
}
