//! Core processing logic for chatlens.
//!
//! This module contains:
//! - [`filter`] - Record filtering by sender and date
//! - [`stats`] - Counts and group-bys over enriched records
//! - [`corpus`] - Concatenated message text and word frequencies
//! - [`report`] - The [`ChatReport`](report::ChatReport) bundle and [`analyze`](report::analyze)
//! - [`output`] - Report writers (text, CSV, JSON)
//!
//! # Quick Start
//!
//! ```rust
//! use chatlens::core::{FilterConfig, ChatStats, apply_filters, build_corpus};
//! use chatlens::enrich::enrich_all;
//! use chatlens::{ChatRecord, StatsConfig};
//!
//! # fn main() -> chatlens::Result<()> {
//! let records = enrich_all(vec![ChatRecord::new("Alice", "hi"), ChatRecord::new("Bob", "yo")]);
//! let alice = apply_filters(records, &FilterConfig::new().with_sender("Alice"))?;
//!
//! let stats = ChatStats::compute(&alice, &StatsConfig::default());
//! assert_eq!(stats.total_messages, 1);
//! assert_eq!(build_corpus(&alice).as_str(), "hi");
//! # Ok(())
//! # }
//! ```

pub mod corpus;
pub mod filter;
pub mod output;
pub mod report;
pub mod stats;

// Re-export main types for convenience
pub use corpus::{Corpus, WordCount, build_corpus};
pub use filter::{FilterConfig, apply_filters, filter_by_user};
pub use report::{ChatReport, Notice, ParseSummary, analyze};
pub use stats::{ChatStats, DayCount, PeriodCount, UserCount};
