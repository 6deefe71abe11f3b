//! Report writers.
//!
//! This module provides writers for different output formats:
//! - [`write_text`] / [`to_text`] - aligned human-readable summary
//! - [`write_csv`] / [`to_csv`] - semicolon CSV of `Table;Label;Count` rows - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - pretty JSON of the whole report - requires `json-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatlens::Result<()> {
//! use std::path::Path;
//! use chatlens::core::output::{to_text, write_csv, write_json};
//! use chatlens::{AnalysisConfig, analyze};
//!
//! let text = std::fs::read_to_string("chat.txt")?;
//! let report = analyze(&text, &AnalysisConfig::default())?;
//!
//! write_csv(&report, Path::new("stats.csv"))?;
//! write_json(&report, Path::new("stats.json"))?;
//! println!("{}", to_text(&report));
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
mod text_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
pub use text_writer::{to_text, write_text};
