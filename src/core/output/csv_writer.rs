//! CSV report writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::report::ChatReport;
use crate::error::Result;

/// Writes the report to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Table`, `Label`, `Count`
/// - Tables, in order: `summary`, `user`, `period`, `day`, `word`
/// - Encoding: UTF-8
pub fn write_csv(report: &ChatReport, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)?;
    write_rows(report, file)
}

/// Converts the report to a CSV string.
///
/// Same format as [`write_csv`], but returns a `String`.
pub fn to_csv(report: &ChatReport) -> Result<String> {
    let mut buf = Vec::new();
    write_rows(report, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

fn write_rows<W: Write>(report: &ChatReport, out: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);

    writer.write_record(["Table", "Label", "Count"])?;

    let summary = [
        ("messages", report.total_messages),
        ("words", report.total_words),
        ("media", report.media_count),
        ("links", report.link_count),
        ("users", report.unique_users),
        ("undated", report.undated),
    ];
    for (label, count) in summary {
        write_row(&mut writer, "summary", label, count)?;
    }

    for u in &report.per_user {
        write_row(&mut writer, "user", &u.sender, u.count)?;
    }
    for p in &report.per_period {
        write_row(&mut writer, "period", &p.label, p.count)?;
    }
    for d in &report.per_day {
        write_row(&mut writer, "day", &d.date.format("%Y-%m-%d").to_string(), d.count)?;
    }
    for w in &report.top_words {
        write_row(&mut writer, "word", &w.word, w.count)?;
    }

    writer.flush()?;
    Ok(())
}

fn write_row<W: Write>(
    writer: &mut csv::Writer<W>,
    table: &str,
    label: &str,
    count: usize,
) -> Result<()> {
    writer.write_record([table, label, count.to_string().as_str()])?;
    Ok(())
}
