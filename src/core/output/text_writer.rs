//! Plain-text report writer.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::core::report::ChatReport;
use crate::error::Result;

/// Writes the human-readable summary to a file.
pub fn write_text(report: &ChatReport, output_path: &Path) -> Result<()> {
    fs::write(output_path, to_text(report))?;
    Ok(())
}

/// Renders a human-readable summary.
///
/// ```text
/// Messages:      2
/// Words:         4
/// ...
/// ```
pub fn to_text(report: &ChatReport) -> String {
    let mut out = String::new();

    if let Some(ref user) = report.user {
        let _ = writeln!(out, "Statistics for {user}");
    } else {
        let _ = writeln!(out, "Statistics for all users");
    }
    out.push('\n');

    let summary = [
        ("Messages", report.total_messages),
        ("Words", report.total_words),
        ("Media shared", report.media_count),
        ("Links shared", report.link_count),
        ("Users", report.unique_users),
    ];
    for (label, value) in summary {
        let _ = writeln!(out, "{:<14}{value}", format!("{label}:"));
    }

    if report.user.is_none() && !report.top_users.is_empty() {
        section(&mut out, "Most active users");
        let width = name_width(report.top_users.iter().map(|u| u.sender.as_str()));
        for u in &report.top_users {
            let _ = writeln!(out, "  {:<width$}  {}", u.sender, u.count);
        }
    }

    if !report.per_period.is_empty() {
        section(&mut out, "Monthly timeline");
        let width = name_width(report.per_period.iter().map(|p| p.label.as_str()));
        for p in &report.per_period {
            let _ = writeln!(out, "  {:<width$}  {}", p.label, p.count);
        }
    }

    if !report.top_words.is_empty() {
        section(&mut out, "Most common words");
        let width = name_width(report.top_words.iter().map(|w| w.word.as_str()));
        for w in &report.top_words {
            let _ = writeln!(out, "  {:<width$}  {}", w.word, w.count);
        }
    }

    if !report.notices.is_empty() {
        section(&mut out, "Notes");
        for notice in &report.notices {
            let _ = writeln!(out, "  - {notice}");
        }
    }

    out
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{title}\n{}", "-".repeat(title.len()));
}

fn name_width<'a>(names: impl Iterator<Item = &'a str>) -> usize {
    names.map(|n| n.chars().count()).max().unwrap_or(0)
}
