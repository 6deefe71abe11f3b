//! Configuration types for parsing and statistics.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`ParserConfig`] - how export lines are turned into records
//! - [`StatsConfig`] - how records are counted
//! - [`AnalysisConfig`] - everything one [`analyze`](crate::analyze) call needs
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::{AnalysisConfig, ParserConfig, StatsConfig, WordCountPolicy};
//!
//! let config = AnalysisConfig::new()
//!     .with_parser(ParserConfig::new().with_skip_system_messages(true))
//!     .with_stats(StatsConfig::new().with_word_policy(WordCountPolicy::ExcludeMedia));
//! ```

use serde::{Deserialize, Serialize};

use crate::core::filter::FilterConfig;

/// Configuration for the line parser.
///
/// # Example
///
/// ```rust
/// use chatlens::config::ParserConfig;
///
/// let config = ParserConfig::new()
///     .with_multiline(false)
///     .with_skip_system_messages(true);
/// assert!(!config.multiline);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Append lines that do not start a new record to the previous record's
    /// body (default: true). When disabled, such lines are skipped and counted.
    pub multiline: bool,

    /// Drop WhatsApp system notices such as "Alice added Bob" (default: false).
    ///
    /// Detection is textual. A person typing "Mum left" is indistinguishable
    /// from the notice and is dropped too; "I added salt" is kept.
    pub skip_system_messages: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            multiline: true,
            skip_system_messages: false,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables multi-line message joining.
    #[must_use]
    pub fn with_multiline(mut self, enabled: bool) -> Self {
        self.multiline = enabled;
        self
    }

    /// Sets whether to skip system messages.
    #[must_use]
    pub fn with_skip_system_messages(mut self, skip: bool) -> Self {
        self.skip_system_messages = skip;
        self
    }
}

/// Whether media placeholder messages contribute to the word total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordCountPolicy {
    /// Count every token literally present, placeholders included.
    #[default]
    IncludeMedia,
    /// Leave "media omitted" messages out of the word total.
    ExcludeMedia,
}

/// Configuration for statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsConfig {
    /// How media messages affect the word total (default: include).
    pub word_policy: WordCountPolicy,

    /// Length of the "most active users" list (default: 10).
    pub top_users: usize,

    /// Length of the most-common-words list (default: 20).
    pub top_words: usize,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            word_policy: WordCountPolicy::default(),
            top_users: 10,
            top_words: 20,
        }
    }
}

impl StatsConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the word count policy.
    #[must_use]
    pub fn with_word_policy(mut self, policy: WordCountPolicy) -> Self {
        self.word_policy = policy;
        self
    }

    /// Sets how many users the top-users list holds.
    #[must_use]
    pub fn with_top_users(mut self, n: usize) -> Self {
        self.top_users = n;
        self
    }

    /// Sets how many words the most-common-words list holds.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }
}

/// Configuration for one analysis run.
#[derive(Debug, Clone, Default)]
pub struct AnalysisConfig {
    /// Parser settings.
    pub parser: ParserConfig,

    /// Statistics settings.
    pub stats: StatsConfig,

    /// Records to keep before aggregating (sender and date range).
    pub filter: FilterConfig,
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the parser configuration.
    #[must_use]
    pub fn with_parser(mut self, parser: ParserConfig) -> Self {
        self.parser = parser;
        self
    }

    /// Sets the statistics configuration.
    #[must_use]
    pub fn with_stats(mut self, stats: StatsConfig) -> Self {
        self.stats = stats;
        self
    }

    /// Sets the record filter.
    #[must_use]
    pub fn with_filter(mut self, filter: FilterConfig) -> Self {
        self.filter = filter;
        self
    }
}
