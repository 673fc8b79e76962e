//! Local-calendar day bucketing
//!
//! Two actions belong to the same day iff their timestamps fall on the same
//! device-local calendar date. No further timezone normalization is applied.

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Format of day keys in persisted per-day maps.
pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// Local calendar date an instant falls on.
pub fn local_day(instant: DateTime<Utc>) -> NaiveDate {
    instant.with_timezone(&Local).date_naive()
}

/// Local calendar date right now.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Canonical string key for a day.
pub fn day_key(day: NaiveDate) -> String {
    day.format(DAY_KEY_FORMAT).to_string()
}

/// Parses a persisted day key back into a date.
pub fn parse_day_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, DAY_KEY_FORMAT).ok()
}
