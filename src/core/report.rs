//! One analysis session, bundled for the presentation layer.
//!
//! [`analyze`] runs the whole pipeline (parse, enrich, filter, aggregate,
//! build corpus) over an export and returns a [`ChatReport`]. The report is
//! plain data: renderers in [`crate::format`] and [`crate::core::output`]
//! only read it.
//!
//! # Example
//!
//! ```
//! use chatlens::{AnalysisConfig, analyze};
//!
//! # fn main() -> chatlens::Result<()> {
//! let text = "[01/02/23, 10:15:00] Alice: Hello there\n\
//!             [01/02/23, 10:16:00] Bob: Hi Alice";
//! let report = analyze(text, &AnalysisConfig::default())?;
//!
//! assert_eq!(report.total_messages, 2);
//! assert_eq!(report.total_words, 4);
//! assert_eq!(report.per_period[0].label, "February 2023");
//! assert!(report.notices.is_empty());
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::path::Path;

use log::info;
use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::core::corpus::{Corpus, WordCount, build_corpus};
use crate::core::filter::apply_filters;
use crate::core::stats::{ChatStats, DayCount, PeriodCount, UserCount};
use crate::enrich::enrich_all;
use crate::error::Result;
use crate::parser::{LineParser, ParsedLog};

/// Non-fatal conditions worth showing next to the numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "count")]
pub enum Notice {
    /// No message text to build a word corpus from.
    EmptyCorpus,
    /// Lines that matched nothing and were dropped.
    SkippedLines(usize),
    /// Records kept without a timestamp; they are missing from time series.
    UndatedRecords(usize),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::EmptyCorpus => write!(f, "no message text available for word analysis"),
            Notice::SkippedLines(n) => {
                write!(f, "{n} line(s) did not match the chat format and were skipped")
            }
            Notice::UndatedRecords(n) => write!(
                f,
                "{n} message(s) have an unreadable date and are left out of time series"
            ),
        }
    }
}

/// Parse diagnostics carried into the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ParseSummary {
    pub lines_scanned: usize,
    pub matched_lines: usize,
    pub continuation_lines: usize,
    pub skipped_lines: usize,
    pub undated: usize,
    pub system_messages: usize,
    /// Records produced by the parser, before filtering.
    pub records: usize,
}

impl From<&ParsedLog> for ParseSummary {
    fn from(log: &ParsedLog) -> Self {
        Self {
            lines_scanned: log.lines_scanned,
            matched_lines: log.matched_lines,
            continuation_lines: log.continuation_lines,
            skipped_lines: log.skipped_lines,
            undated: log.undated,
            system_messages: log.system_messages,
            records: log.records.len(),
        }
    }
}

/// One (label, count) point of the monthly series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodEntry {
    /// e.g. `"February 2023"`
    pub label: String,
    pub year: i32,
    /// 1-based month number.
    pub month: u32,
    pub count: usize,
}

impl From<&PeriodCount> for PeriodEntry {
    fn from(p: &PeriodCount) -> Self {
        Self {
            label: p.label(),
            year: p.year,
            month: p.month.number_from_month(),
            count: p.count,
        }
    }
}

/// Everything a caller needs to display one chat analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatReport {
    /// Sender the report was narrowed to, if any.
    pub user: Option<String>,
    pub total_messages: usize,
    pub total_words: usize,
    pub media_count: usize,
    pub link_count: usize,
    pub unique_users: usize,
    pub undated: usize,
    pub per_user: Vec<UserCount>,
    pub top_users: Vec<UserCount>,
    pub per_period: Vec<PeriodEntry>,
    pub per_day: Vec<DayCount>,
    pub top_words: Vec<WordCount>,
    /// All bodies joined with spaces; empty when there is no text.
    pub corpus: String,
    pub parse: ParseSummary,
    pub notices: Vec<Notice>,
}

impl ChatReport {
    /// Builds a report from an already parsed log.
    ///
    /// # Errors
    ///
    /// Returns [`SenderNotFound`](crate::ChatlensError::SenderNotFound) if the
    /// configured sender filter matches nobody.
    pub fn from_parsed(log: ParsedLog, config: &AnalysisConfig) -> Result<Self> {
        let parse = ParseSummary::from(&log);
        let records = apply_filters(enrich_all(log.records), &config.filter)?;

        let stats = ChatStats::compute(&records, &config.stats);
        let corpus = build_corpus(&records);

        let mut notices = Vec::new();
        if parse.skipped_lines > 0 {
            notices.push(Notice::SkippedLines(parse.skipped_lines));
        }
        if stats.undated > 0 {
            notices.push(Notice::UndatedRecords(stats.undated));
        }
        if corpus.is_empty() {
            notices.push(Notice::EmptyCorpus);
        }

        let top_words = corpus.most_common_words(config.stats.top_words);
        let corpus = match corpus {
            Corpus::Text(text) => text,
            Corpus::Empty => String::new(),
        };

        Ok(Self {
            user: config.filter.sender.clone(),
            total_messages: stats.total_messages,
            total_words: stats.total_words,
            media_count: stats.media_count,
            link_count: stats.link_count,
            unique_users: stats.unique_users,
            undated: stats.undated,
            per_user: stats.per_user,
            top_users: stats.top_users,
            per_period: stats.per_period.iter().map(PeriodEntry::from).collect(),
            per_day: stats.per_day,
            top_words,
            corpus,
            parse,
            notices,
        })
    }

    /// Returns `true` if any non-fatal notice was raised.
    pub fn has_notices(&self) -> bool {
        !self.notices.is_empty()
    }
}

/// Parses `text` and computes a full report.
///
/// # Errors
///
/// - [`MalformedInput`](crate::ChatlensError::MalformedInput) if no record
///   could be parsed. No partial report is produced.
/// - [`SenderNotFound`](crate::ChatlensError::SenderNotFound) if the sender
///   filter names someone absent from the chat.
pub fn analyze(text: &str, config: &AnalysisConfig) -> Result<ChatReport> {
    let log = LineParser::with_config(config.parser).parse_str(text)?;
    let report = ChatReport::from_parsed(log, config)?;
    info!(
        "analyzed {} messages from {} users",
        report.total_messages, report.unique_users
    );
    Ok(report)
}

/// Reads an export file and computes a full report.
pub fn analyze_file(path: &Path, config: &AnalysisConfig) -> Result<ChatReport> {
    let log = LineParser::with_config(config.parser).parse(path)?;
    let report = ChatReport::from_parsed(log, config)?;
    info!(
        "analyzed {} messages from {} users in {}",
        report.total_messages,
        report.unique_users,
        path.display()
    );
    Ok(report)
}
