//! Time utilities: whole-day truncation for the timeline.

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// 00:00:00 of `day`.
pub fn day_start(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN)
}

/// 23:59:59 of `day`.
pub fn day_end(day: NaiveDate) -> NaiveDateTime {
    // 23:59:59 is always a valid time.
    day.and_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN))
}

/// Signed number of calendar days from `from` to `to`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Parse a calendar day like "2024-06-10".
pub fn parse_day(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| anyhow::anyhow!("invalid date '{raw}' (expected YYYY-MM-DD): {e}"))
}
