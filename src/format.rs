//! Output format types for the chatlens library.
//!
//! This module provides library-first format types that don't depend on CLI
//! frameworks.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatlens::Result<()> {
//! use chatlens::format::{OutputFormat, to_format_string};
//! use chatlens::{AnalysisConfig, analyze};
//!
//! let report = analyze("[01/02/23, 10:15:00] Alice: Hello!", &AnalysisConfig::default())?;
//!
//! let csv = to_format_string(&report, OutputFormat::Csv)?;
//! assert!(csv.starts_with("Table;Label;Count"));
//!
//! // Or use format detection from extension
//! let format = OutputFormat::from_path("stats.json")?;
//! assert_eq!(format, OutputFormat::Json);
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::report::ChatReport;
use crate::error::{ChatlensError, Result};

/// How a [`ChatReport`] is rendered.
///
/// - [`Text`](OutputFormat::Text) - aligned summary for a terminal
/// - [`Json`](OutputFormat::Json) - the full report, for other programs
/// - [`Csv`](OutputFormat::Csv) - `Table;Label;Count` rows, for spreadsheets
///
/// # Example
///
/// ```rust
/// use chatlens::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("json").unwrap();
/// assert_eq!(format, OutputFormat::Json);
/// assert_eq!(format.extension(), "json");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Human-readable summary (default)
    #[default]
    Text,

    /// Pretty-printed JSON of the whole report
    Json,

    /// CSV with semicolon delimiter
    Csv,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    ///
    /// ```rust
    /// use chatlens::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Text.extension(), "txt");
    /// assert_eq!(OutputFormat::Csv.extension(), "csv");
    /// ```
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "txt", "json", "csv"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Text, OutputFormat::Json, OutputFormat::Csv]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text/plain",
            OutputFormat::Json => "application/json",
            OutputFormat::Csv => "text/csv",
        }
    }

    /// Detects format from a file path based on extension.
    ///
    /// ```rust
    /// use chatlens::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_path("out.CSV").unwrap(), OutputFormat::Csv);
    /// assert!(OutputFormat::from_path("out.xml").is_err());
    /// ```
    pub fn from_path(path: &str) -> Result<Self> {
        let ext = Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "txt" | "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ChatlensError::invalid_format(format!(
                "Unknown file extension: '.{}'. Expected one of: txt, json, csv",
                ext
            ))),
        }
    }

    #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
    fn required_feature(self) -> &'static str {
        match self {
            OutputFormat::Text => "none",
            OutputFormat::Json => "json-output",
            OutputFormat::Csv => "csv-output",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "Text"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes a report to a file in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
pub fn write_to_format(report: &ChatReport, path: &Path, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => crate::core::output::write_text(report, path),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(report, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(report, path),
        #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
        _ => Err(missing_feature(format)),
    }
}

/// Renders a report to a string in the specified format.
pub fn to_format_string(report: &ChatReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(crate::core::output::to_text(report)),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(report),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(report),
        #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
        _ => Err(missing_feature(format)),
    }
}

#[cfg(not(all(feature = "csv-output", feature = "json-output")))]
fn missing_feature(format: OutputFormat) -> ChatlensError {
    ChatlensError::invalid_format(format!(
        "Output format {} requires the '{}' feature to be enabled",
        format,
        format.required_feature()
    ))
}
