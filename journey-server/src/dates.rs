//! Free-form date input normalization.
//!
//! Users describe departure times in whatever shape comes to mind. The
//! journey API only accepts `YYYYMMDDTHHMMSS`, so every input goes through
//! [`normalize`] first.
//!
//! Slash-delimited dates are always read day-first (`03/04/2025` is the
//! 3rd of April). A leading component above 12 makes that reading the only
//! possible one; anything else is ambiguous and day-first is assumed.
//! Inputs without a slash are ISO or written forms and carry no day-first
//! bias.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use tracing::debug;

use crate::domain::{API_DATETIME_FORMAT, ApiDateTime};

/// The input families accepted by [`normalize`], with examples.
pub const ACCEPTED_FORMATS: [&str; 3] = [
    "ISO: '2025-11-28' or '2025-11-28 08:00'",
    "European: '28/11/2025' or '28/11/2025 08:00'",
    "Written: 'November 28, 2025' or '28 November 2025'",
];

/// Error returned when a date string cannot be understood.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("could not parse date '{input}'. Supported formats: {}", .accepted.join("; "))]
pub struct InvalidDateFormat {
    /// The input exactly as supplied.
    pub input: String,
    /// Examples of what would have been accepted.
    pub accepted: &'static [&'static str],
}

impl InvalidDateFormat {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
            accepted: &ACCEPTED_FORMATS,
        }
    }
}

/// How a slash-delimited date was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFirst {
    /// The first component exceeds 12, so it can only be a day.
    Certain,
    /// Month-first would also be valid; day-first is assumed.
    Assumed,
}

/// Classify a slash-delimited date token such as `28/11/2025`.
///
/// ```
/// use journey_server::dates::{DayFirst, classify_slash_date};
///
/// assert_eq!(classify_slash_date("13/01/2025"), DayFirst::Certain);
/// assert_eq!(classify_slash_date("12/01/2025"), DayFirst::Assumed);
/// ```
pub fn classify_slash_date(token: &str) -> DayFirst {
    let first = token.split('/').next().unwrap_or_default();
    let is_numeric = !first.is_empty() && first.bytes().all(|b| b.is_ascii_digit());

    if is_numeric && first.parse::<u64>().is_ok_and(|n| n > 12) {
        DayFirst::Certain
    } else {
        DayFirst::Assumed
    }
}

/// Normalize a user-supplied date to the API's wire format.
///
/// Absent or blank input means "now" in local time.
pub fn normalize(input: Option<&str>) -> Result<ApiDateTime, InvalidDateFormat> {
    normalize_at(input, Local::now().naive_local())
}

/// [`normalize`] with an explicit current time.
pub fn normalize_at(
    input: Option<&str>,
    now: NaiveDateTime,
) -> Result<ApiDateTime, InvalidDateFormat> {
    let Some(original) = input else {
        return Ok(ApiDateTime::new(now));
    };
    let text = original.trim();
    if text.is_empty() {
        return Ok(ApiDateTime::new(now));
    }

    let parsed = match text.split_whitespace().next() {
        Some(first) if first.contains('/') => {
            let order = classify_slash_date(first);
            debug!(input = text, ?order, "reading slash date day-first");
            parse_day_first(text, now.date())
        }
        _ => parse_general(text, now.date()),
    };

    match parsed.filter(|dt| WIRE_YEARS.contains(&dt.year())) {
        Some(datetime) => Ok(ApiDateTime::new(datetime)),
        None => {
            debug!(input = original, "unparsable date input");
            Err(InvalidDateFormat::new(original))
        }
    }
}

/// Years that fit the four-digit wire encoding.
const WIRE_YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

/// Formats tried against the whole input before tokenizing.
const WHOLE_DATETIME_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    API_DATETIME_FORMAT,
];

/// Date formats tried against a leading run of tokens.
const DATE_FORMATS: [&str; 5] = [
    "%Y-%m-%d",
    "%B %d %Y",
    "%d %B %Y",
    "%A %B %d %Y",
    "%A %d %B %Y",
];

const CLOCK_FORMATS: [&str; 3] = ["%H:%M:%S", "%H:%M", "%Hh%M"];

/// Words that may sit between the date and the time ("28 November 2025 at 8am").
const FILLER_WORDS: [&str; 4] = ["at", "on", "of", "the"];

fn parse_day_first(text: &str, today: NaiveDate) -> Option<NaiveDateTime> {
    let mut tokens = text.split_whitespace();
    let date_token = tokens.next()?.trim_end_matches(',');
    let rest: Vec<&str> = tokens.filter(|t| !is_filler(t)).collect();

    let date = parse_slash_date(date_token, today)?;
    let time = parse_clock_tokens(&rest)?;
    Some(date.and_time(time))
}

/// Parse `D/M/YYYY`, `D/M/YY` or `D/M`.
fn parse_slash_date(token: &str, today: NaiveDate) -> Option<NaiveDate> {
    let parts: Vec<&str> = token.split('/').collect();
    if !(2..=3).contains(&parts.len())
        || parts
            .iter()
            .any(|p| p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }

    let day: u32 = parts[0].parse().ok()?;
    let month: u32 = parts[1].parse().ok()?;
    let year = match parts.get(2) {
        None => today.year(),
        Some(y) if y.len() <= 2 => 2000 + y.parse::<i32>().ok()?,
        Some(y) if y.len() == 4 => y.parse().ok()?,
        Some(_) => return None,
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_general(text: &str, today: NaiveDate) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        // Keep the wall-clock time as written; the API takes naive local time.
        return Some(dt.naive_local());
    }

    if let Some(dt) = WHOLE_DATETIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(text, f).ok())
    {
        return Some(dt);
    }

    if let Some(time) = parse_clock(text) {
        return Some(today.and_time(time));
    }

    let cleaned = text.replace(',', " ");
    let tokens: Vec<String> = cleaned
        .split_whitespace()
        .filter(|t| !is_filler(t))
        .map(strip_ordinal)
        .collect();

    (1..=tokens.len()).find_map(|split| {
        let date_text = tokens[..split].join(" ");
        let date = DATE_FORMATS
            .iter()
            .find_map(|f| NaiveDate::parse_from_str(&date_text, f).ok())?;
        let rest: Vec<&str> = tokens[split..].iter().map(String::as_str).collect();
        let time = parse_clock_tokens(&rest)?;
        Some(date.and_time(time))
    })
}

/// Parse the tokens following a date. No tokens means midnight.
fn parse_clock_tokens(tokens: &[&str]) -> Option<NaiveTime> {
    if tokens.is_empty() {
        return Some(NaiveTime::MIN);
    }
    parse_clock(&tokens.join(" "))
}

/// Parse `HH:MM`, `HH:MM:SS`, `8h30`, `8am`, `8:30 pm` and similar.
fn parse_clock(text: &str) -> Option<NaiveTime> {
    let lower = text.trim().to_ascii_lowercase();

    let (body, pm) = if let Some(body) = lower.strip_suffix("am") {
        (body.trim(), Some(false))
    } else if let Some(body) = lower.strip_suffix("pm") {
        (body.trim(), Some(true))
    } else {
        (lower.as_str(), None)
    };

    let time = CLOCK_FORMATS
        .iter()
        .find_map(|f| NaiveTime::parse_from_str(body, f).ok());

    let Some(pm) = pm else {
        return time;
    };

    // A bare hour is only meaningful with am/pm attached.
    let time = match time {
        Some(t) => t,
        None if !body.is_empty() && body.bytes().all(|b| b.is_ascii_digit()) => {
            NaiveTime::from_hms_opt(body.parse().ok()?, 0, 0)?
        }
        None => return None,
    };

    let hour = time.hour();
    if !(1..=12).contains(&hour) {
        return None;
    }
    let hour24 = match (hour, pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, false) => h,
        (h, true) => h + 12,
    };
    time.with_hour(hour24)
}

fn is_filler(token: &str) -> bool {
    FILLER_WORDS
        .iter()
        .any(|w| token.eq_ignore_ascii_case(w))
}

/// "28th" -> "28". Other tokens pass through unchanged.
fn strip_ordinal(token: &str) -> String {
    let lower = token.to_ascii_lowercase();
    for suffix in ["st", "nd", "rd", "th"] {
        if let Some(digits) = lower.strip_suffix(suffix)
            && !digits.is_empty()
            && digits.bytes().all(|b| b.is_ascii_digit())
        {
            return digits.to_string();
        }
    }
    token.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 15)
            .unwrap()
            .and_hms_opt(14, 5, 9)
            .unwrap()
    }

    fn norm(input: &str) -> String {
        normalize_at(Some(input), now()).unwrap().to_string()
    }

    #[test]
    fn absent_input_is_now() {
        assert_eq!(
            normalize_at(None, now()).unwrap().to_string(),
            "20250615T140509"
        );
    }

    #[test]
    fn blank_input_is_now() {
        assert_eq!(norm(""), "20250615T140509");
        assert_eq!(norm("   "), "20250615T140509");
    }

    #[test]
    fn iso_date_is_midnight() {
        assert_eq!(norm("2025-11-28"), "20251128T000000");
    }

    #[test]
    fn iso_date_and_time() {
        assert_eq!(norm("2025-11-28 08:00"), "20251128T080000");
        assert_eq!(norm("2025-11-28T08:30"), "20251128T083000");
        assert_eq!(norm("2025-11-28T08:30:15"), "20251128T083015");
        assert_eq!(norm("2025-11-28 08:30:15"), "20251128T083015");
    }

    #[test]
    fn rfc3339_keeps_wall_clock_time() {
        assert_eq!(norm("2025-11-28T08:30:00+01:00"), "20251128T083000");
        assert_eq!(norm("2025-11-28T08:30:00Z"), "20251128T083000");
    }

    #[test]
    fn wire_format_passes_through() {
        assert_eq!(norm("20251128T083000"), "20251128T083000");
    }

    #[test]
    fn european_slash_date() {
        assert_eq!(norm("28/11/2025"), "20251128T000000");
        assert_eq!(norm("28/11/2025 08:00"), "20251128T080000");
        assert_eq!(norm("28/11/2025 at 8:15pm"), "20251128T201500");
    }

    #[test]
    fn ambiguous_slash_date_is_day_first() {
        assert_eq!(norm("03/04/2025"), "20250403T000000");
        assert_eq!(norm("3/4/2025"), "20250403T000000");
    }

    #[test]
    fn slash_boundary_at_twelve() {
        assert_eq!(classify_slash_date("12/01/2025"), DayFirst::Assumed);
        assert_eq!(classify_slash_date("13/01/2025"), DayFirst::Certain);
        assert_eq!(norm("12/01/2025"), "20250112T000000");
        assert_eq!(norm("13/01/2025"), "20250113T000000");
    }

    #[test]
    fn classify_non_numeric_is_assumed() {
        assert_eq!(classify_slash_date("Nov/28/2025"), DayFirst::Assumed);
        assert_eq!(classify_slash_date("/11/2025"), DayFirst::Assumed);
        assert_eq!(classify_slash_date("99999999999999999999999/1"), DayFirst::Assumed);
    }

    #[test]
    fn month_first_only_reading_is_rejected() {
        // 11/28 can only be month-first, which is never tried
        assert!(normalize_at(Some("11/28/2025"), now()).is_err());
    }

    #[test]
    fn slash_short_forms() {
        assert_eq!(norm("28/11/25"), "20251128T000000");
        assert_eq!(norm("28/11"), "20251128T000000");
        assert_eq!(norm("28/11/2025, 09:45"), "20251128T094500");
    }

    #[test]
    fn slash_invalid_calendar_date() {
        assert!(normalize_at(Some("31/02/2025"), now()).is_err());
        assert!(normalize_at(Some("13/13/2025"), now()).is_err());
        assert!(normalize_at(Some("28/11/202"), now()).is_err());
        assert!(normalize_at(Some("28//2025"), now()).is_err());
    }

    #[test]
    fn written_dates() {
        assert_eq!(norm("November 28, 2025"), "20251128T000000");
        assert_eq!(norm("28 November 2025"), "20251128T000000");
        assert_eq!(norm("Nov 28 2025"), "20251128T000000");
        assert_eq!(norm("28th november 2025"), "20251128T000000");
        assert_eq!(norm("Friday, November 28, 2025"), "20251128T000000");
    }

    #[test]
    fn written_dates_with_time() {
        assert_eq!(norm("November 28, 2025 8:00am"), "20251128T080000");
        assert_eq!(norm("November 28, 2025 8:00 AM"), "20251128T080000");
        assert_eq!(norm("28 November 2025 at 17:45"), "20251128T174500");
        assert_eq!(norm("Nov 28 2025 8pm"), "20251128T200000");
        assert_eq!(norm("28 November 2025 8h30"), "20251128T083000");
    }

    #[test]
    fn bare_time_is_today() {
        assert_eq!(norm("08:15"), "20250615T081500");
        assert_eq!(norm("9pm"), "20250615T210000");
    }

    #[test]
    fn twelve_am_and_pm() {
        assert_eq!(norm("2025-11-28 12am"), "20251128T000000");
        assert_eq!(norm("2025-11-28 12:30pm"), "20251128T123000");
    }

    #[test]
    fn wrong_weekday_is_rejected() {
        assert!(normalize_at(Some("Monday, November 28, 2025"), now()).is_err());
    }

    #[test]
    fn year_outside_four_digits_is_rejected() {
        for input in [
            "+12025-11-28T08:00:00",
            "+12025-11-28T08:00:00Z",
            "-0001-11-28",
            "12025-11-28 08:00",
        ] {
            let err = normalize_at(Some(input), now()).unwrap_err();
            assert_eq!(err.input, input);
        }
    }

    #[test]
    fn garbage_is_rejected() {
        for input in [
            "not a date",
            "2025-13-01",
            "2025-11-28 25:00",
            "13pm",
            "8",
        ] {
            assert!(normalize_at(Some(input), now()).is_err(), "{input}");
        }
    }

    #[test]
    fn error_carries_input_and_formats() {
        let err = normalize_at(Some("next blursday"), now()).unwrap_err();
        assert_eq!(err.input, "next blursday");
        assert_eq!(err.accepted.len(), 3);

        let msg = err.to_string();
        assert!(msg.contains("'next blursday'"));
        assert!(msg.contains("ISO"));
        assert!(msg.contains("European"));
        assert!(msg.contains("Written"));
    }

    #[test]
    fn iso_and_european_agree() {
        assert_eq!(
            normalize_at(Some("2025-11-28"), now()).unwrap(),
            normalize_at(Some("28/11/2025"), now()).unwrap()
        );
    }
}
