//! Line grammar for bracketed WhatsApp exports.
//!
//! A line that starts a new message looks like:
//!
//! ```text
//! [D/M/YY, H:MM:SS] Sender: Message
//! [D/M/YYYY, H:MM:SS AM] Sender: Message
//! ```
//!
//! Dates are always read day-first. The year may have two digits (chrono's
//! `%y` pivot: 00-68 is 20xx, 69-99 is 19xx) or four.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

use crate::error::Result;

/// Regex for a line that starts a new record.
///
/// Groups: 1 = date, 2 = time (with optional AM/PM), 3 = sender, 4 = message.
/// The sender is everything up to the first `": "`. The separator is
/// required, so `"Alice: "` is an empty message but `"Alice:"` matches nothing.
pub const LINE_PATTERN: &str = r"^\[(\d{1,2}/\d{1,2}/\d{2,4}),\s(\d{1,2}:\d{2}:\d{2}(?:\s?[APap][Mm])?)\]\s(.+?):\s(.*)$";

/// Characters some exporters put in front of the opening bracket.
const LEADING_MARKS: &[char] = &['\u{feff}', '\u{200e}', '\u{200f}'];

/// The four captures of a line that starts a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMatch<'a> {
    pub date: &'a str,
    pub time: &'a str,
    pub sender: &'a str,
    pub body: &'a str,
}

/// Compiled line grammar.
#[derive(Debug, Clone)]
pub struct LineGrammar {
    regex: Regex,
}

impl LineGrammar {
    /// Compiles [`LINE_PATTERN`].
    pub fn compile() -> Result<Self> {
        Ok(Self {
            regex: Regex::new(LINE_PATTERN)?,
        })
    }

    /// Matches a single line against the grammar.
    ///
    /// Leading whitespace, direction/BOM marks and a trailing `\r` are
    /// ignored. The body keeps any other trailing whitespace.
    /// Returns `None` if the line does not start a new record.
    pub fn match_line<'a>(&self, line: &'a str) -> Option<LineMatch<'a>> {
        let line = clean_line(line);
        let caps = self.regex.captures(line)?;

        Some(LineMatch {
            date: caps.get(1).map_or("", |m| m.as_str()),
            time: caps.get(2).map_or("", |m| m.as_str()),
            sender: caps.get(3).map_or("", |m| m.as_str().trim()),
            body: caps.get(4).map_or("", |m| m.as_str()),
        })
    }

    /// Returns `true` if the line starts a new record.
    pub fn is_record_start(&self, line: &str) -> bool {
        self.regex.is_match(clean_line(line))
    }
}

fn clean_line(line: &str) -> &str {
    line.trim_start()
        .trim_start_matches(LEADING_MARKS)
        .trim_end_matches(['\r', '\n'])
}

/// Parses a captured date and time into a timestamp.
///
/// Returns `None` for impossible dates (31/02), three-digit years, or
/// out-of-range clock values such as `13:00:00 PM`.
pub fn parse_timestamp(date_str: &str, time_str: &str) -> Option<NaiveDateTime> {
    let date = parse_date(date_str)?;
    let time = parse_time(time_str)?;
    Some(date.and_time(time))
}

/// Parses a day-first `D/M/Y` date.
pub fn parse_date(date_str: &str) -> Option<NaiveDate> {
    let mut parts = date_str.trim().split('/');
    let day: u32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let year_str = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let year: i32 = year_str.parse().ok()?;
    let year = match year_str.len() {
        2 if year < 69 => 2000 + year,
        2 => 1900 + year,
        4 => year,
        _ => return None,
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parses `H:MM:SS` with an optional AM/PM suffix.
pub fn parse_time(time_str: &str) -> Option<NaiveTime> {
    let time_str = time_str.trim();
    let suffix_at = time_str
        .find(|c: char| c.is_ascii_alphabetic())
        .unwrap_or(time_str.len());
    let (clock, meridiem) = time_str.split_at(suffix_at);

    let mut parts = clock.trim_end().split(':');
    let hour: u32 = parts.next()?.parse().ok()?;
    let minute: u32 = parts.next()?.parse().ok()?;
    let second: u32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }

    let hour = match meridiem.to_ascii_uppercase().as_str() {
        "" => hour,
        "AM" if (1..=12).contains(&hour) => hour % 12,
        "PM" if (1..=12).contains(&hour) => hour % 12 + 12,
        _ => return None,
    };

    NaiveTime::from_hms_opt(hour, minute, second)
}

/// Returns `true` if a record looks like a WhatsApp system notice rather than
/// something a person typed.
///
/// Only used when `ParserConfig::skip_system_messages` is enabled.
///
/// Membership notices (`"Alice added Bob"`, `"Carol left"`) are only
/// recognized when the whole body has that shape and the actor looks like a
/// name: `You`, a phone number, or capitalized words other than a pronoun.
/// A message such as `"Mum left"` typed by a person is still dropped.
pub fn is_system_message(sender: &str, body: &str) -> bool {
    const CONTAINS: &[&str] = &[
        "messages and calls are end-to-end encrypted",
        "created group",
        "changed the subject",
        "changed this group's icon",
        "changed the group description",
        "deleted this group's icon",
        "changed their phone number",
        "joined using this group's invite link",
        "security code changed",
        "you're now an admin",
        "turned on disappearing messages",
        "turned off disappearing messages",
    ];

    if sender.trim().is_empty() {
        return true;
    }

    let body = body.trim().trim_start_matches(LEADING_MARKS);
    let lower = body.to_lowercase();

    CONTAINS.iter().any(|s| lower.contains(s)) || is_membership_notice(body)
}

fn is_membership_notice(body: &str) -> bool {
    for verb in [" added ", " removed "] {
        if let Some((actor, target)) = body.split_once(verb) {
            if looks_like_name(actor) && !target.trim().is_empty() {
                return true;
            }
        }
    }
    ["left", "joined"].iter().any(|verb| {
        body.strip_suffix(verb)
            .and_then(|rest| rest.strip_suffix(' '))
            .is_some_and(looks_like_name)
    })
}

fn looks_like_name(actor: &str) -> bool {
    const PRONOUNS: &[&str] = &["I", "We", "He", "She", "They", "It"];

    let actor = actor.trim();
    if actor == "You" {
        return true;
    }
    if actor.is_empty() || PRONOUNS.contains(&actor) {
        return false;
    }
    actor.split_whitespace().all(|word| {
        word.chars()
            .next()
            .is_some_and(|c| c.is_uppercase() || c.is_ascii_digit() || c == '+')
    })
}
