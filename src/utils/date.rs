//! Calendar parsing for post dates.
//!
//! Explicit dates come from page metadata in whatever shape the author
//! wrote them. Accepted forms, tried in order:
//!
//! | Form | Example |
//! |------|---------|
//! | RFC 3339 | `2024-06-15T14:30:45+02:00` |
//! | RFC 2822 | `Sat, 15 Jun 2024 14:30:45 GMT` |
//! | date, time and offset | `2024-06-15 14:30:45 +0200` |
//! | date and time (UTC) | `2024-06-15 14:30:45`, `2024-06-15 14:30:45 UTC`, ... |
//! | date only (UTC midnight) | `2024-06-15`, `2024/06/15`, `June 15, 2024`, `15 June 2024` |
//!
//! Values without an offset are taken as UTC.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

/// Formats carrying an explicit offset.
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S %z", "%Y-%m-%d %H:%M %z"];

/// Formats without offset, interpreted as UTC.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S UTC",
    "%Y-%m-%d %H:%M UTC",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Month names match full or abbreviated, any case.
const NAIVE_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y", "%d %B %Y"];

/// Parse a date or datetime string.
///
/// Returns `None` when no accepted form matches or the value is not a real
/// calendar date (e.g. `2023-02-29`).
pub fn parse_date(s: &str) -> Option<DateTime<FixedOffset>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt);
    }

    OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NAIVE_DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|naive| naive.and_utc().fixed_offset())
        })
        .or_else(|| {
            NAIVE_DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
                .and_then(midnight_utc)
        })
}

/// Midnight UTC of the given calendar day.
pub fn ymd_utc(year: i32, month: u32, day: u32) -> Option<DateTime<FixedOffset>> {
    NaiveDate::from_ymd_opt(year, month, day).and_then(midnight_utc)
}

#[inline]
fn midnight_utc(date: NaiveDate) -> Option<DateTime<FixedOffset>> {
    date.and_hms_opt(0, 0, 0)
        .map(|naive| naive.and_utc().fixed_offset())
}
