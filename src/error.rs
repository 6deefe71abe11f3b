//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum that covers all error
//! cases in the library, following the pattern used by crates like
//! `reqwest`, `serde_json`, and `csv`.
//!
//! # Recoverable vs. blocking conditions
//!
//! Only two conditions reach the caller as errors during analysis:
//!
//! - [`ChatlensError::MalformedInput`]: not a single line matched the chat
//!   grammar, so there is nothing to analyze.
//! - [`ChatlensError::SenderNotFound`]: a sender filter named someone who never
//!   wrote in the chat.
//!
//! Skipped lines, unparseable dates and an empty corpus are *not* errors; they
//! are reported through [`ParsedLog`](crate::parser::ParsedLog) counters and
//! [`Notice`](crate::core::report::Notice)s instead.

use std::fmt;
use std::io;

use serde::Serialize;
use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::ChatRecord;
///
/// fn my_function() -> Result<Vec<ChatRecord>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred while reading an export or writing a report.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input produced zero chat records.
    ///
    /// No partial results are computed in this case.
    #[error("No valid chat data found: {reason}")]
    MalformedInput {
        /// Why nothing could be parsed
        reason: MalformedReason,
    },

    /// A sender filter named a user that does not appear in the chat.
    #[error("Sender '{sender}' does not appear in this chat")]
    SenderNotFound {
        /// The requested sender
        sender: String,
    },

    /// Invalid date format in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// Unknown or unavailable output format.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// Which kind of format was being selected
        format: &'static str,
        /// What went wrong
        message: String,
    },

    /// The line grammar failed to compile.
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

/// Why an input was rejected as [`ChatlensError::MalformedInput`].
///
/// Keeps "the file is empty" apart from "the file has content but none of it
/// looks like a chat export".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum MalformedReason {
    /// The input was empty or contained only whitespace.
    EmptyInput,
    /// The input had content, but no line matched the chat grammar.
    NoMatchingLines {
        /// Number of non-blank lines that were examined
        lines_scanned: usize,
    },
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::EmptyInput => write!(f, "the input is empty"),
            MalformedReason::NoMatchingLines { lines_scanned } => write!(
                f,
                "none of {lines_scanned} lines matched the \
                 '[D/M/Y, H:MM:SS] Sender: Message' format"
            ),
        }
    }
}

impl From<std::string::FromUtf8Error> for ChatlensError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatlensError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates a malformed input error for an empty export.
    pub fn empty_input() -> Self {
        ChatlensError::MalformedInput {
            reason: MalformedReason::EmptyInput,
        }
    }

    /// Creates a malformed input error for an export where nothing matched.
    pub fn no_matching_lines(lines_scanned: usize) -> Self {
        ChatlensError::MalformedInput {
            reason: MalformedReason::NoMatchingLines { lines_scanned },
        }
    }

    /// Creates a sender-not-found error.
    pub fn sender_not_found(sender: impl Into<String>) -> Self {
        ChatlensError::SenderNotFound {
            sender: sender.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatlensError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates an invalid output format error.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        ChatlensError::InvalidFormat {
            format: "output",
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if the input produced no records at all.
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, ChatlensError::MalformedInput { .. })
    }

    /// Returns `true` if a sender filter matched nobody.
    pub fn is_sender_not_found(&self) -> bool {
        matches!(self, ChatlensError::SenderNotFound { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatlensError::InvalidDate { .. })
    }
}
