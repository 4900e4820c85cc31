//! Timestamp decoding against the board timezone.

use anyhow::{Result, bail};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use chrono_tz::Tz;

const NAIVE_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Parse an API timestamp into the board's wall clock.
///
/// Accepted forms:
/// - RFC 3339 with offset or `Z` (converted into `tz`)
/// - naive `YYYY-MM-DDTHH:MM:SS[.fff]`, `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM` (already local)
/// - date-only `YYYY-MM-DD` (midnight)
pub fn parse_timestamp(raw: &str, tz: Tz) -> Result<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        bail!("empty timestamp");
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&tz).naive_local());
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(ndt);
        }
    }

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d.and_time(NaiveTime::MIN));
    }

    bail!("unrecognised timestamp '{s}' (expected RFC 3339 or YYYY-MM-DD)")
}
