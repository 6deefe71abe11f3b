//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options
//!
//! [`Args`] converts into the library's plain configuration types, so the
//! binary itself only wires I/O:
//!
//! ```rust
//! use chatlens::cli::Args;
//! use clap::Parser;
//!
//! let args = Args::parse_from(["chatlens", "chat.txt", "--user", "Alice", "--top", "3"]);
//! let config = args.analysis_config()?;
//! assert_eq!(config.filter.sender.as_deref(), Some("Alice"));
//! assert_eq!(config.stats.top_users, 3);
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::config::{AnalysisConfig, ParserConfig, StatsConfig, WordCountPolicy};
use crate::core::filter::FilterConfig;
use crate::error::Result;

/// Message, word, media, link and activity statistics for WhatsApp chat exports.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt --user Alice
    chatlens chat.txt -f json -o stats.json
    chatlens chat.txt --after 2023-01-01 --before 2023-06-30 -f csv")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Only count messages from this sender (exact name)
    #[arg(short, long, value_name = "NAME")]
    pub user: Option<String>,

    /// Only count messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Only count messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Number of most active users to list
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub top: usize,

    /// Number of most common words to list
    #[arg(long, value_name = "N", default_value_t = 20)]
    pub words: usize,

    /// Leave "media omitted" messages out of the word total
    #[arg(long)]
    pub exclude_media_words: bool,

    /// Treat lines without a timestamp as skipped instead of continuations
    #[arg(long)]
    pub no_multiline: bool,

    /// Drop WhatsApp system notices (group changes, encryption banner)
    #[arg(long)]
    pub skip_system: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Builds the analysis configuration these arguments describe.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDate`](crate::ChatlensError::InvalidDate) if `--after`
    /// or `--before` is not `YYYY-MM-DD`.
    pub fn analysis_config(&self) -> Result<AnalysisConfig> {
        let parser = ParserConfig::new()
            .with_multiline(!self.no_multiline)
            .with_skip_system_messages(self.skip_system);

        let policy = if self.exclude_media_words {
            WordCountPolicy::ExcludeMedia
        } else {
            WordCountPolicy::IncludeMedia
        };
        let stats = StatsConfig::new()
            .with_word_policy(policy)
            .with_top_users(self.top)
            .with_top_words(self.words);

        let mut filter = FilterConfig::new();
        if let Some(ref after) = self.after {
            filter = filter.with_date_from(after)?;
        }
        if let Some(ref before) = self.before {
            filter = filter.with_date_to(before)?;
        }
        if let Some(ref user) = self.user {
            filter = filter.with_sender(user.clone());
        }

        Ok(AnalysisConfig::new()
            .with_parser(parser)
            .with_stats(stats)
            .with_filter(filter))
    }

    /// Log level selected by `-v`.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Output format options.
///
/// - [`Text`](OutputFormat::Text) - aligned summary (default)
/// - [`Json`](OutputFormat::Json) - the full report as JSON
/// - [`Csv`](OutputFormat::Csv) - semicolon `Table;Label;Count` rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    #[value(alias = "txt")]
    Text,

    /// Pretty JSON
    Json,

    /// CSV with semicolon delimiter
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format::OutputFormat::from(*self))
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Text => crate::format::OutputFormat::Text,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
        }
    }
}
