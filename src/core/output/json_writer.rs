//! JSON report writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::report::ChatReport;
use crate::error::Result;

/// Writes the report to a JSON file.
///
/// # Format
/// ```json
/// {
///   "user": null,
///   "total_messages": 2,
///   "per_user": [{"sender": "Alice", "count": 1}],
///   "per_period": [{"label": "February 2023", "year": 2023, "month": 2, "count": 2}],
///   "notices": []
/// }
/// ```
pub fn write_json(report: &ChatReport, output_path: &Path) -> Result<()> {
    let json = to_json(report)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts the report to a pretty-printed JSON string.
///
/// Same format as [`write_json`], but returns a `String`.
pub fn to_json(report: &ChatReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
