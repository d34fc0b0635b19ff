//! Timestamps in the journey API's wire format.
//!
//! The API encodes date-times as `YYYYMMDDTHHMMSS` (15 characters, local
//! naive time, no offset). Outgoing requests use [`ApiDateTime`]; incoming
//! journey timestamps are kept as raw strings and only reformatted for
//! display by [`display_timestamp`].

use chrono::{Datelike, NaiveDateTime, Timelike};
use std::fmt;

/// chrono format string for the wire encoding.
pub const API_DATETIME_FORMAT: &str = "%Y%m%dT%H%M%S";

/// A departure time in canonical wire form.
///
/// # Examples
///
/// ```
/// use journey_server::domain::ApiDateTime;
/// use chrono::NaiveDate;
///
/// let dt = NaiveDate::from_ymd_opt(2025, 11, 28)
///     .unwrap()
///     .and_hms_opt(8, 30, 0)
///     .unwrap();
/// assert_eq!(ApiDateTime::new(dt).to_string(), "20251128T083000");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ApiDateTime(NaiveDateTime);

impl ApiDateTime {
    /// Wrap a naive local date-time.
    pub fn new(datetime: NaiveDateTime) -> Self {
        // Sub-second precision cannot be expressed on the wire.
        Self(datetime.with_nanosecond(0).unwrap_or(datetime))
    }

    /// Parse the exact wire encoding.
    pub fn parse(s: &str) -> Option<Self> {
        NaiveDateTime::parse_from_str(s, API_DATETIME_FORMAT)
            .ok()
            .filter(|dt| (0..=9999).contains(&dt.year()))
            .map(Self)
    }

    /// Returns the underlying naive date-time.
    pub fn as_naive(&self) -> NaiveDateTime {
        self.0
    }

    /// Returns the `YYYYMMDD` date prefix.
    pub fn date_prefix(&self) -> String {
        self.0.format("%Y%m%d").to_string()
    }
}

impl fmt::Debug for ApiDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiDateTime({})", self)
    }
}

impl fmt::Display for ApiDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(API_DATETIME_FORMAT))
    }
}

/// Reformat a raw `YYYYMMDDTHHMMSS` string as `YYYY-MM-DD HH:MM`.
///
/// This is a literal substring operation on character offsets 0-4, 4-6,
/// 6-8, 9-11 and 11-13. Nothing is validated: a malformed or short input
/// yields a malformed output rather than an error, and never panics.
///
/// ```
/// use journey_server::domain::display_timestamp;
///
/// assert_eq!(display_timestamp("20251128T083000"), "2025-11-28 08:30");
/// assert_eq!(display_timestamp("2025"), "2025-- :");
/// ```
pub fn display_timestamp(raw: &str) -> String {
    format!(
        "{}-{}-{} {}:{}",
        char_slice(raw, 0, 4),
        char_slice(raw, 4, 6),
        char_slice(raw, 6, 8),
        char_slice(raw, 9, 11),
        char_slice(raw, 11, 13),
    )
}

/// Characters `start..end` of `s`, clamped to its length.
fn char_slice(s: &str, start: usize, end: usize) -> &str {
    let byte_at = |n: usize| s.char_indices().nth(n).map_or(s.len(), |(i, _)| i);
    let (from, to) = (byte_at(start), byte_at(end));
    &s[from..to.max(from)]
}
