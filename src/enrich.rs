//! Calendar fields derived from record timestamps.
//!
//! [`enrich`] attaches [`CalendarFields`] to a [`ChatRecord`]. Records without
//! a timestamp get `calendar: None`; no placeholder zeros are ever produced.

use chrono::{Datelike, Month, NaiveDate, Timelike};
use serde::Serialize;

use crate::ChatRecord;

/// Calendar breakdown of a record's timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarFields {
    pub year: i32,
    pub month: Month,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl CalendarFields {
    /// English month name, e.g. `"February"`.
    pub fn month_name(&self) -> &'static str {
        self.month.name()
    }

    /// The (year, month) bucket this timestamp falls into.
    pub fn period(&self) -> Period {
        Period {
            year: self.year,
            month: self.month,
        }
    }

    /// Calendar date without the time of day.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month.number_from_month(), self.day)
    }
}

/// A (year, month) bucket for temporal aggregation.
///
/// Orders chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Period {
    pub year: i32,
    pub month: Month,
}

impl Period {
    /// Display label, e.g. `"February 2023"`.
    pub fn label(&self) -> String {
        format!("{} {}", self.month.name(), self.year)
    }

    fn sort_key(&self) -> (i32, u32) {
        (self.year, self.month.number_from_month())
    }
}

impl PartialOrd for Period {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Period {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

/// A record plus its derived calendar fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedRecord {
    #[serde(flatten)]
    pub record: ChatRecord,

    /// `None` exactly when `record.timestamp` is `None`.
    pub calendar: Option<CalendarFields>,
}

impl EnrichedRecord {
    pub fn sender(&self) -> &str {
        &self.record.sender
    }

    pub fn body(&self) -> &str {
        &self.record.body
    }

    pub fn period(&self) -> Option<Period> {
        self.calendar.map(|c| c.period())
    }

    pub fn is_dated(&self) -> bool {
        self.calendar.is_some()
    }
}

impl From<ChatRecord> for EnrichedRecord {
    fn from(record: ChatRecord) -> Self {
        enrich(record)
    }
}

/// Derives calendar fields for one record.
///
/// # Example
///
/// ```rust
/// use chatlens::ChatRecord;
/// use chatlens::enrich::enrich;
/// use chrono::{Month, NaiveDate};
///
/// let ts = NaiveDate::from_ymd_opt(2023, 2, 1).unwrap().and_hms_opt(10, 15, 0).unwrap();
/// let rec = enrich(ChatRecord::new("Alice", "hi").with_timestamp(ts));
///
/// let cal = rec.calendar.unwrap();
/// assert_eq!(cal.month, Month::February);
/// assert_eq!(cal.month_name(), "February");
/// assert_eq!((cal.day, cal.hour, cal.minute), (1, 10, 15));
///
/// assert!(enrich(ChatRecord::new("Bob", "?")).calendar.is_none());
/// ```
pub fn enrich(record: ChatRecord) -> EnrichedRecord {
    let calendar = record.timestamp.and_then(|ts| {
        let month = u8::try_from(ts.month())
            .ok()
            .and_then(|m| Month::try_from(m).ok())?;
        Some(CalendarFields {
            year: ts.year(),
            month,
            day: ts.day(),
            hour: ts.hour(),
            minute: ts.minute(),
        })
    });

    EnrichedRecord { record, calendar }
}

/// Enriches a whole sequence, keeping its order.
pub fn enrich_all(records: Vec<ChatRecord>) -> Vec<EnrichedRecord> {
    records.into_iter().map(enrich).collect()
}
