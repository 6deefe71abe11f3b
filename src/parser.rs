//! Line parser for WhatsApp text exports.
//!
//! [`LineParser`] turns export text into an ordered list of [`ChatRecord`]s
//! and reports what it had to skip along the way.
//!
//! ```text
//! [01/02/23, 10:15:00] Alice: Hello there
//! [01/02/23, 10:16:00] Bob: Hi Alice
//! and this line continues Bob's message
//! ```
//!
//! # Example
//!
//! ```rust
//! use chatlens::parser::LineParser;
//!
//! let text = "[01/02/23, 10:15:00] Alice: Hello there\n\
//!             [01/02/23, 10:16:00] Bob: Hi Alice";
//! let log = LineParser::new().parse_str(text)?;
//!
//! assert_eq!(log.records.len(), 2);
//! assert_eq!(log.records[1].sender, "Bob");
//! assert_eq!(log.skipped_lines, 0);
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```
//!
//! # Outcomes
//!
//! - At least one record: `Ok(ParsedLog)`, with counters for skipped lines,
//!   unparseable dates and dropped system messages.
//! - Empty input: `Err(MalformedInput { reason: EmptyInput })`.
//! - Content but no matching line: `Err(MalformedInput { reason: NoMatchingLines { .. } })`.

use std::fs;
use std::path::Path;

use log::{debug, trace, warn};
use serde::Serialize;

use crate::ChatRecord;
use crate::config::ParserConfig;
use crate::error::{ChatlensError, Result};
use crate::parsing::grammar::{LineGrammar, is_system_message, parse_timestamp};

/// Result of a successful parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedLog {
    /// Records in file order.
    pub records: Vec<ChatRecord>,

    /// Non-blank lines examined.
    pub lines_scanned: usize,

    /// Lines that started a record (including dropped system messages).
    pub matched_lines: usize,

    /// Lines appended to a previous record's body.
    pub continuation_lines: usize,

    /// Lines that matched nothing and were dropped.
    pub skipped_lines: usize,

    /// Records whose date or time could not be parsed.
    pub undated: usize,

    /// System notices dropped because of `skip_system_messages`.
    pub system_messages: usize,
}

impl ParsedLog {
    /// Returns `true` if any line was skipped.
    pub fn is_partial(&self) -> bool {
        self.skipped_lines > 0
    }
}

/// Parser for bracketed WhatsApp TXT exports.
///
/// # Example
///
/// ```rust,no_run
/// use chatlens::parser::LineParser;
///
/// let parser = LineParser::new();
/// let log = parser.parse("whatsapp_chat.txt".as_ref())?;
/// println!("{} messages", log.records.len());
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct LineParser {
    config: ParserConfig,
}

impl LineParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Reads a UTF-8 export file and parses it.
    pub fn parse(&self, path: &Path) -> Result<ParsedLog> {
        let content = fs::read_to_string(path)?;
        debug!("read {} bytes from {}", content.len(), path.display());
        self.parse_str(&content)
    }

    /// Parses export content already held in memory.
    pub fn parse_str(&self, content: &str) -> Result<ParsedLog> {
        if content.trim().is_empty() {
            return Err(ChatlensError::empty_input());
        }

        let grammar = LineGrammar::compile()?;

        let mut log = ParsedLog {
            records: Vec::new(),
            lines_scanned: 0,
            matched_lines: 0,
            continuation_lines: 0,
            skipped_lines: 0,
            undated: 0,
            system_messages: 0,
        };
        // Set while the most recent record start was a dropped system notice,
        // so its continuation lines are dropped with it.
        let mut in_dropped_record = false;
        // Blank lines seen since the last non-blank line. Kept inside a
        // multiline body only if another continuation line follows.
        let mut pending_blank = 0usize;

        for (line_no, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                pending_blank += 1;
                continue;
            }
            let blank_before = std::mem::take(&mut pending_blank);
            log.lines_scanned += 1;

            if let Some(m) = grammar.match_line(line) {
                log.matched_lines += 1;

                if self.config.skip_system_messages && is_system_message(m.sender, m.body) {
                    trace!("line {}: dropped system message", line_no + 1);
                    log.system_messages += 1;
                    in_dropped_record = true;
                    continue;
                }
                in_dropped_record = false;

                let mut record =
                    ChatRecord::new(m.sender, m.body.trim_end()).with_raw(m.date, m.time);
                match parse_timestamp(m.date, m.time) {
                    Some(ts) => record.timestamp = Some(ts),
                    None => {
                        debug!(
                            "line {}: unparseable timestamp '{}, {}'",
                            line_no + 1,
                            m.date,
                            m.time
                        );
                        log.undated += 1;
                    }
                }
                log.records.push(record);
            } else if self.config.multiline && in_dropped_record {
                log.continuation_lines += 1;
            } else if self.config.multiline && !log.records.is_empty() {
                // Continuation of previous message (multiline)
                if let Some(last) = log.records.last_mut() {
                    for _ in 0..=blank_before {
                        last.body.push('\n');
                    }
                    last.body.push_str(line.trim_end());
                }
                log.continuation_lines += 1;
            } else {
                trace!("line {}: skipped", line_no + 1);
                log.skipped_lines += 1;
            }
        }

        if log.records.is_empty() && log.system_messages == 0 {
            warn!(
                "no chat lines found among {} non-blank lines",
                log.lines_scanned
            );
            return Err(ChatlensError::no_matching_lines(log.lines_scanned));
        }

        if log.skipped_lines > 0 {
            warn!(
                "skipped {} of {} lines that did not match the chat format",
                log.skipped_lines, log.lines_scanned
            );
        }
        debug!(
            "parsed {} records ({} continuation lines, {} undated, {} system messages dropped)",
            log.records.len(),
            log.continuation_lines,
            log.undated,
            log.system_messages
        );

        Ok(log)
    }
}
