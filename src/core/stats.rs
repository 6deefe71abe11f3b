//! Aggregate statistics over enriched records.
//!
//! Every function here is a pure view of a record slice: nothing is cached,
//! and calling it twice on the same input gives the same answer.
//!
//! # Example
//!
//! ```
//! use chatlens::core::stats;
//! use chatlens::enrich::enrich_all;
//! use chatlens::ChatRecord;
//!
//! let records = enrich_all(vec![
//!     ChatRecord::new("Alice", "Hello there"),
//!     ChatRecord::new("Bob", "<Media omitted>"),
//!     ChatRecord::new("Alice", "https://example.com"),
//! ]);
//!
//! assert_eq!(stats::total_messages(&records), 3);
//! assert_eq!(stats::total_words(&records), 5);
//! assert_eq!(stats::media_count(&records), 1);
//! assert_eq!(stats::link_count(&records), 1);
//!
//! let users = stats::per_user_counts(&records);
//! assert_eq!(users[0].sender, "Alice");
//! assert_eq!(users[0].count, 2);
//! ```

use std::collections::{BTreeMap, HashMap};

use chrono::{Month, NaiveDate};
use log::trace;
use serde::Serialize;

use crate::config::{StatsConfig, WordCountPolicy};
use crate::enrich::{EnrichedRecord, Period};

/// Messages sent by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserCount {
    pub sender: String,
    pub count: usize,
}

/// Messages sent in one (year, month) period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeriodCount {
    pub year: i32,
    pub month: Month,
    pub count: usize,
}

impl PeriodCount {
    pub fn period(&self) -> Period {
        Period {
            year: self.year,
            month: self.month,
        }
    }

    /// Display label, e.g. `"February 2023"`.
    pub fn label(&self) -> String {
        self.period().label()
    }
}

/// Messages sent on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// Number of records.
pub fn total_messages(records: &[EnrichedRecord]) -> usize {
    records.len()
}

/// Sum of whitespace-delimited tokens across all bodies.
///
/// Media placeholders count literally.
pub fn total_words(records: &[EnrichedRecord]) -> usize {
    records.iter().map(|r| r.record.word_count()).sum()
}

/// Records whose body contains "media omitted" (any case).
pub fn media_count(records: &[EnrichedRecord]) -> usize {
    records.iter().filter(|r| r.record.is_media()).count()
}

/// Records whose body contains at least one URL.
pub fn link_count(records: &[EnrichedRecord]) -> usize {
    records.iter().filter(|r| r.record.has_link()).count()
}

/// Records without a usable timestamp.
pub fn undated_count(records: &[EnrichedRecord]) -> usize {
    records.iter().filter(|r| !r.is_dated()).count()
}

/// Number of distinct senders.
pub fn unique_users(records: &[EnrichedRecord]) -> usize {
    per_user_counts(records).len()
}

/// Message count per sender, most active first.
///
/// Ties keep the order in which senders first appear.
pub fn per_user_counts(records: &[EnrichedRecord]) -> Vec<UserCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<UserCount> = Vec::new();

    for rec in records {
        match index.get(rec.sender()) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(rec.sender(), counts.len());
                counts.push(UserCount {
                    sender: rec.sender().to_string(),
                    count: 1,
                });
            }
        }
    }

    // stable sort keeps first-appearance order among equal counts
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// The `n` most active senders.
pub fn top_users(records: &[EnrichedRecord], n: usize) -> Vec<UserCount> {
    let mut counts = per_user_counts(records);
    counts.truncate(n);
    counts
}

/// Message count per (year, month), oldest first.
///
/// Undated records are left out; see [`undated_count`].
pub fn per_period_counts(records: &[EnrichedRecord]) -> Vec<PeriodCount> {
    let mut buckets: BTreeMap<Period, usize> = BTreeMap::new();
    for period in records.iter().filter_map(EnrichedRecord::period) {
        *buckets.entry(period).or_insert(0) += 1;
    }

    buckets
        .into_iter()
        .map(|(p, count)| PeriodCount {
            year: p.year,
            month: p.month,
            count,
        })
        .collect()
}

/// Message count per calendar day, oldest first. Undated records are left out.
pub fn per_day_counts(records: &[EnrichedRecord]) -> Vec<DayCount> {
    let mut buckets: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for ts in records.iter().filter_map(|r| r.record.timestamp) {
        *buckets.entry(ts.date()).or_insert(0) += 1;
    }

    buckets
        .into_iter()
        .map(|(date, count)| DayCount { date, count })
        .collect()
}

/// All the numbers for one record sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatStats {
    pub total_messages: usize,
    pub total_words: usize,
    pub media_count: usize,
    pub link_count: usize,
    pub unique_users: usize,
    pub undated: usize,
    pub per_user: Vec<UserCount>,
    pub top_users: Vec<UserCount>,
    pub per_period: Vec<PeriodCount>,
    pub per_day: Vec<DayCount>,
}

impl ChatStats {
    /// Computes every statistic in one call.
    ///
    /// With [`WordCountPolicy::ExcludeMedia`] the word total skips media
    /// placeholder messages; all other counts are unaffected.
    pub fn compute(records: &[EnrichedRecord], config: &StatsConfig) -> Self {
        let words = match config.word_policy {
            WordCountPolicy::IncludeMedia => total_words(records),
            WordCountPolicy::ExcludeMedia => records
                .iter()
                .filter(|r| !r.record.is_media())
                .map(|r| r.record.word_count())
                .sum(),
        };

        let per_user = per_user_counts(records);
        let top_users = per_user.iter().take(config.top_users).cloned().collect();

        let stats = Self {
            total_messages: total_messages(records),
            total_words: words,
            media_count: media_count(records),
            link_count: link_count(records),
            unique_users: per_user.len(),
            undated: undated_count(records),
            per_user,
            top_users,
            per_period: per_period_counts(records),
            per_day: per_day_counts(records),
        };
        trace!(
            "stats: {} messages, {} words, {} users",
            stats.total_messages, stats.total_words, stats.unique_users
        );
        stats
    }
}
