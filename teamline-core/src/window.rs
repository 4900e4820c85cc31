//! Visible-window resolution and zoom.
//!
//! The timeline always shows one Monday..Sunday week. Navigation is a signed
//! week offset relative to a reference date (usually today).

use anyhow::{Result, bail};
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::time::{day_end, day_start};

pub const DAYS_PER_WEEK: usize = 7;

/// Closed day interval `[start, end]`, Monday through Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VisibleWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl VisibleWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn start_at(&self) -> NaiveDateTime {
        day_start(self.start)
    }

    pub fn end_at(&self) -> NaiveDateTime {
        day_end(self.end)
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }
}

impl fmt::Display for VisibleWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Monday..Sunday of the ISO week containing `reference + week_offset` weeks.
///
/// Weeks start on Monday regardless of locale. An offset that runs past the
/// calendar range chrono supports yields the reference week; use
/// [`checked_resolve_window`] where that should be an error.
pub fn resolve_window(reference: NaiveDate, week_offset: i32) -> VisibleWindow {
    checked_resolve_window(reference, week_offset).unwrap_or_else(|_| {
        let start = week_start(reference);
        let end = start.checked_add_days(Days::new(6)).unwrap_or(start);
        VisibleWindow { start, end }
    })
}

fn week_start(day: NaiveDate) -> NaiveDate {
    let back = u64::from(day.weekday().num_days_from_monday());
    day.checked_sub_days(Days::new(back)).unwrap_or(day)
}

/// Like [`resolve_window`], but fails when the target week is out of range.
pub fn checked_resolve_window(reference: NaiveDate, week_offset: i32) -> Result<VisibleWindow> {
    let monday = week_start(reference);
    let Some(start) = monday.checked_add_signed(TimeDelta::days(i64::from(week_offset) * 7)) else {
        bail!("week offset {week_offset} from {reference} is outside the supported calendar");
    };
    let Some(end) = start.checked_add_days(Days::new(6)) else {
        bail!("week offset {week_offset} from {reference} is outside the supported calendar");
    };
    Ok(VisibleWindow { start, end })
}

/// Horizontal zoom factor in `[Zoom::MIN, Zoom::MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Zoom(f64);

impl Zoom {
    pub const MIN: f64 = 0.5;
    pub const MAX: f64 = 2.0;
    pub const STEP: f64 = 0.25;

    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() {
            bail!("zoom must be a finite number, got {value}");
        }
        if !(Self::MIN..=Self::MAX).contains(&value) {
            bail!("zoom {value} is outside {}..={}", Self::MIN, Self::MAX);
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn zoom_in(self) -> Self {
        Self((self.0 + Self::STEP).min(Self::MAX))
    }

    pub fn zoom_out(self) -> Self {
        Self((self.0 - Self::STEP).max(Self::MIN))
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self(1.0)
    }
}

impl TryFrom<f64> for Zoom {
    type Error = anyhow::Error;

    fn try_from(value: f64) -> Result<Self> {
        Zoom::new(value)
    }
}

impl From<Zoom> for f64 {
    fn from(z: Zoom) -> f64 {
        z.0
    }
}
