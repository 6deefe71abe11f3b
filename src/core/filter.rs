//! Filter records by sender and date range.
//!
//! This module provides [`FilterConfig`] for defining filter criteria,
//! [`apply_filters`] for filtering a record sequence, and [`filter_by_user`]
//! for the per-sender view.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Records on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Records on or before date |
//! | Sender | [`with_sender`](FilterConfig::with_sender) | Records from one sender |
//!
//! # Examples
//!
//! ## Filter by Sender
//!
//! ```
//! use chatlens::core::filter::filter_by_user;
//! use chatlens::enrich::enrich_all;
//! use chatlens::ChatRecord;
//!
//! # fn main() -> chatlens::Result<()> {
//! let records = enrich_all(vec![
//!     ChatRecord::new("Alice", "Hello"),
//!     ChatRecord::new("Bob", "Hi there"),
//!     ChatRecord::new("Alice", "How are you?"),
//! ]);
//!
//! let alice = filter_by_user(&records, "Alice")?;
//! assert_eq!(alice.len(), 2);
//!
//! // Exact match only, and an unknown sender is an error
//! assert!(filter_by_user(&records, "alice").unwrap_err().is_sender_not_found());
//! # Ok(())
//! # }
//! ```
//!
//! ## Filter by Date Range
//!
//! ```
//! use chatlens::core::filter::{FilterConfig, apply_filters};
//! use chatlens::enrich::enrich_all;
//! use chatlens::ChatRecord;
//! use chrono::NaiveDate;
//!
//! # fn main() -> chatlens::Result<()> {
//! let at = |m, d| NaiveDate::from_ymd_opt(2024, m, d).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let records = enrich_all(vec![
//!     ChatRecord::new("Alice", "Old").with_timestamp(at(1, 1)),
//!     ChatRecord::new("Alice", "New").with_timestamp(at(6, 15)),
//! ]);
//!
//! let config = FilterConfig::new()
//!     .with_date_from("2024-06-01")?
//!     .with_date_to("2024-12-31")?;
//!
//! let filtered = apply_filters(records, &config)?;
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].body(), "New");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Records without timestamps are **excluded** when date filters are active
//! - Sender matching is exact
//! - Multiple filters are combined with AND logic

use chrono::NaiveDate;
use log::debug;

use crate::enrich::EnrichedRecord;
use crate::error::{ChatlensError, Result};

/// Configuration for filtering records by date and sender.
///
/// Filters are combined with AND logic: a record must match all active
/// filters to be included in the result.
///
/// # Examples
///
/// ```
/// use chatlens::core::filter::FilterConfig;
///
/// # fn main() -> chatlens::Result<()> {
/// // Filter by sender only
/// let by_sender = FilterConfig::new().with_sender("Alice");
///
/// // Filter by date range
/// let by_date = FilterConfig::new()
///     .with_date_from("2024-01-01")?
///     .with_date_to("2024-12-31")?;
///
/// // Combined filters
/// let combined = FilterConfig::new()
///     .with_sender("Alice")
///     .with_date_from("2024-06-01")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Include only records from this sender (exact match).
    pub sender: Option<String>,

    /// Include only records on or after this date.
    pub after: Option<NaiveDate>,

    /// Include only records on or before this date.
    pub before: Option<NaiveDate>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all records pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive).
    ///
    /// Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self> {
        self.after = Some(parse_filter_date(date_str)?);
        Ok(self)
    }

    /// Sets the end date filter (inclusive).
    ///
    /// The whole day is included. Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self> {
        self.before = Some(parse_filter_date(date_str)?);
        Ok(self)
    }

    /// Sets the sender filter.
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    /// Sets the start date directly.
    #[must_use]
    pub fn with_after(mut self, date: NaiveDate) -> Self {
        self.after = Some(date);
        self
    }

    /// Sets the end date directly.
    #[must_use]
    pub fn with_before(mut self, date: NaiveDate) -> Self {
        self.before = Some(date);
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.after.is_some() || self.before.is_some() || self.sender.is_some()
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if sender filter is active.
    pub fn has_user_filter(&self) -> bool {
        self.sender.is_some()
    }

    fn accepts(&self, rec: &EnrichedRecord) -> bool {
        if let Some(ref sender) = self.sender {
            if rec.sender() != sender {
                return false;
            }
        }

        if self.has_date_filter() {
            let Some(date) = rec.record.timestamp.map(|ts| ts.date()) else {
                // No timestamp - exclude from date-filtered results
                return false;
            };
            if self.after.is_some_and(|after| date < after) {
                return false;
            }
            if self.before.is_some_and(|before| date > before) {
                return false;
            }
        }

        true
    }
}

/// Parses a `YYYY-MM-DD` filter date.
pub fn parse_filter_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d")
        .map_err(|_| ChatlensError::invalid_date(date_str))
}

/// Filters a record sequence based on the provided configuration.
///
/// Order is preserved. If no filters are active, returns the input unchanged.
///
/// # Errors
///
/// Returns [`ChatlensError::SenderNotFound`] if a sender filter is set and no
/// record in `records` has that sender.
pub fn apply_filters(
    records: Vec<EnrichedRecord>,
    config: &FilterConfig,
) -> Result<Vec<EnrichedRecord>> {
    if !config.is_active() {
        return Ok(records);
    }

    if let Some(ref sender) = config.sender {
        if !records.iter().any(|r| r.sender() == sender) {
            return Err(ChatlensError::sender_not_found(sender.clone()));
        }
    }

    let before = records.len();
    let kept: Vec<EnrichedRecord> = records
        .into_iter()
        .filter(|rec| config.accepts(rec))
        .collect();
    debug!("filters kept {} of {} records", kept.len(), before);

    Ok(kept)
}

/// Returns every record sent by `sender`, in order.
///
/// Matching is exact. A known sender always yields at least one record.
///
/// # Errors
///
/// Returns [`ChatlensError::SenderNotFound`] if nobody by that name wrote in
/// the chat.
pub fn filter_by_user(records: &[EnrichedRecord], sender: &str) -> Result<Vec<EnrichedRecord>> {
    let selected: Vec<EnrichedRecord> = records
        .iter()
        .filter(|r| r.sender() == sender)
        .cloned()
        .collect();

    if selected.is_empty() {
        return Err(ChatlensError::sender_not_found(sender));
    }
    Ok(selected)
}
