//! The parsed chat record type.
//!
//! A [`ChatRecord`] is one message from a chat export: who sent it, when, and
//! what it said. The parser produces them in file order; everything else in
//! the crate only reads them.
//!
//! # Examples
//!
//! ```
//! use chatlens::ChatRecord;
//!
//! let rec = ChatRecord::new("Alice", "Look at https://example.com");
//! assert_eq!(rec.sender(), "Alice");
//! assert!(rec.has_link());
//! assert!(!rec.is_media());
//! assert_eq!(rec.word_count(), 3);
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Case-insensitive marker WhatsApp writes in place of an attachment
/// when a chat is exported without media.
pub const MEDIA_MARKER: &str = "media omitted";

/// Case-insensitive URL prefixes that make a message count as a link.
pub const LINK_MARKERS: &[&str] = &["http://", "https://", "www."];

/// One message parsed from a chat export.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `Option<NaiveDateTime>` | Send time; `None` when the date could not be parsed |
/// | `sender` | `String` | Display name or phone number, verbatim |
/// | `body` | `String` | Message text, verbatim; multi-line bodies use `\n` |
/// | `raw_date` | `String` | Date text exactly as captured from the export |
/// | `raw_time` | `String` | Time text exactly as captured from the export |
///
/// Export timestamps carry no time zone, so they stay naive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRecord {
    /// When the message was sent, or `None` if the date was unparseable.
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,

    /// Display name or phone number of the author.
    pub sender: String,

    /// Message text.
    pub body: String,

    /// Date text as it appeared in the export.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub raw_date: String,

    /// Time text as it appeared in the export.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub raw_time: String,
}

impl ChatRecord {
    /// Creates a record with only sender and body.
    ///
    /// The timestamp is unknown and the raw date/time fields are empty.
    pub fn new(sender: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            timestamp: None,
            sender: sender.into(),
            body: body.into(),
            raw_date: String::new(),
            raw_time: String::new(),
        }
    }

    /// Builder method to set the timestamp.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatlens::ChatRecord;
    /// use chrono::NaiveDate;
    ///
    /// let ts = NaiveDate::from_ymd_opt(2023, 2, 1)
    ///     .unwrap()
    ///     .and_hms_opt(10, 15, 0)
    ///     .unwrap();
    /// let rec = ChatRecord::new("Alice", "Hello").with_timestamp(ts);
    /// assert_eq!(rec.timestamp(), Some(ts));
    /// ```
    #[must_use]
    pub fn with_timestamp(mut self, ts: NaiveDateTime) -> Self {
        self.timestamp = Some(ts);
        self
    }

    /// Builder method to record the raw date and time captured from the export.
    #[must_use]
    pub fn with_raw(mut self, date: impl Into<String>, time: impl Into<String>) -> Self {
        self.raw_date = date.into();
        self.raw_time = time.into();
        self
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the timestamp, if it could be parsed.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        self.timestamp
    }

    // =========================================================================
    // Content classification
    // =========================================================================

    /// Number of whitespace-delimited tokens in the body.
    ///
    /// Media placeholders are counted literally ("<Media omitted>" is two words).
    pub fn word_count(&self) -> usize {
        self.body.split_whitespace().count()
    }

    /// Returns `true` if the body contains the "media omitted" placeholder.
    pub fn is_media(&self) -> bool {
        self.body.to_lowercase().contains(MEDIA_MARKER)
    }

    /// Returns `true` if the body contains an `http://`, `https://` or `www.` URL.
    pub fn has_link(&self) -> bool {
        let lower = self.body.to_lowercase();
        LINK_MARKERS.iter().any(|marker| lower.contains(marker))
    }

    /// Returns `true` if the body is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }
}
