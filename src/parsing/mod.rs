//! Line-level parsing utilities.
//!
//! [`grammar`] holds the regex and the timestamp rules for a single export
//! line; [`LineParser`](crate::parser::LineParser) drives it over a whole file.

pub mod grammar;

pub use grammar::{
    LINE_PATTERN, LineGrammar, LineMatch, is_system_message, parse_date, parse_time,
    parse_timestamp,
};
