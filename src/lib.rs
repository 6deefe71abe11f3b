//! # Chatlens
//!
//! A Rust library for parsing WhatsApp chat exports and computing descriptive
//! statistics: message, word, media and link counts, per-user activity, and
//! monthly and daily timelines.
//!
//! ## Overview
//!
//! The pipeline runs in one synchronous pass per export:
//!
//! 1. [`parser::LineParser`] turns export text into ordered [`ChatRecord`]s
//! 2. [`enrich`] derives calendar fields (year, month, day, hour, minute)
//! 3. [`core::filter`] optionally narrows to one sender or a date range
//! 4. [`core::stats`] and [`core::corpus`] aggregate
//! 5. [`core::report`] bundles the results into a [`ChatReport`]
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let text = "[01/02/23, 10:15:00] Alice: Hello there\n\
//!                 [01/02/23, 10:16:00] Bob: Hi Alice";
//!
//!     let report = analyze(text, &AnalysisConfig::default())?;
//!
//!     assert_eq!(report.total_messages, 2);
//!     assert_eq!(report.total_words, 4);
//!     assert_eq!(report.media_count, 0);
//!     assert_eq!(report.link_count, 0);
//!     Ok(())
//! }
//! ```
//!
//! ## Working with Records Directly
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let log = LineParser::new().parse_str("[01/02/23, 10:15:00] Alice: <Media omitted>")?;
//! let records = enrich_all(log.records);
//!
//! assert_eq!(stats::media_count(&records), 1);
//! assert_eq!(filter_by_user(&records, "Alice")?.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`]: [`LineParser`](parser::LineParser) and [`ParsedLog`](parser::ParsedLog)
//! - [`parsing`]: the line grammar and timestamp rules
//! - [`enrich`]: [`EnrichedRecord`](enrich::EnrichedRecord), [`CalendarFields`](enrich::CalendarFields)
//! - [`config`]: [`ParserConfig`], [`StatsConfig`], [`AnalysisConfig`]
//! - [`core`]: filtering, statistics, corpus, report and writers
//! - [`format`]: [`OutputFormat`](format::OutputFormat)
//! - [`cli`]: CLI argument types (feature `cli`)
//! - [`error`]: [`ChatlensError`], [`Result`]
//! - [`prelude`]: Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod enrich;
pub mod error;
pub mod format;
pub mod parser;
pub mod parsing;
pub mod record;

// Re-export the main types at the crate root for convenience
pub use config::{AnalysisConfig, ParserConfig, StatsConfig, WordCountPolicy};
pub use crate::core::report::{ChatReport, analyze, analyze_file};
pub use error::{ChatlensError, Result};
pub use record::ChatRecord;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    pub use crate::ChatRecord;

    // Error types
    pub use crate::error::{ChatlensError, MalformedReason, Result};

    // Parsing
    pub use crate::parser::{LineParser, ParsedLog};

    // Configuration
    pub use crate::config::{AnalysisConfig, ParserConfig, StatsConfig, WordCountPolicy};

    // Enrichment
    pub use crate::enrich::{CalendarFields, EnrichedRecord, Period, enrich, enrich_all};

    // Filtering
    pub use crate::core::filter::{FilterConfig, apply_filters, filter_by_user};

    // Aggregation
    pub use crate::core::corpus::{Corpus, WordCount, build_corpus};
    pub use crate::core::stats::{self, ChatStats, DayCount, PeriodCount, UserCount};

    // Report
    pub use crate::core::report::{ChatReport, Notice, ParseSummary, analyze, analyze_file};

    // Output
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
}
