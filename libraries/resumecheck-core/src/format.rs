//! Timestamp formatting for tables and report headers.
//!
//! The API sends ISO-8601 strings. Anything that does not parse is shown
//! as-is.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

fn parse(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// `Jan 5, 2024`
pub fn short_date(raw: &str) -> String {
    parse(raw).map_or_else(|| raw.to_string(), |dt| dt.format("%b %-d, %Y").to_string())
}

/// `January 5, 2024, 03:07 PM`
pub fn long_datetime(raw: &str) -> String {
    parse(raw).map_or_else(
        || raw.to_string(),
        |dt| dt.format("%B %-d, %Y, %I:%M %p").to_string(),
    )
}
