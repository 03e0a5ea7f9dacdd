//! Date token parsing
//!
//! Accepts RFC 3339 instants and the date shapes people type into chat
//! (`2020/01/01`, `2020-01-01`, `2020.01.01`, optionally with `THH:MM[:SS]`).
//! Tokens without an explicit offset are read in the command time zone.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};

const DATE_FORMATS: &[&str] = &["%Y/%m/%d", "%Y-%m-%d", "%Y.%m.%d"];

const DATETIME_FORMATS: &[&str] = &[
    "%Y/%m/%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y.%m.%dT%H:%M:%S",
    "%Y/%m/%dT%H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y.%m.%dT%H:%M",
];

/// Parse a date token into seconds since the Unix epoch
///
/// Returns `None` when the token is not a recognizable date.
pub fn parse_date(token: &str, offset: FixedOffset) -> Option<i64> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(token) {
        return Some(instant.timestamp());
    }

    let naive = DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(token, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(token, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;

    offset
        .from_local_datetime(&naive)
        .single()
        .map(|local| local.timestamp())
}
