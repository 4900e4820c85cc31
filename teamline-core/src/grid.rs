//! Day grid: the seven columns of the visible week.
//!
//! Percentage layout is the primary positioning strategy and ignores zoom;
//! pixel values scale with zoom.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::window::{DAYS_PER_WEEK, VisibleWindow, Zoom};

/// Pixel width of one day at zoom 1.0.
pub const BASE_DAY_WIDTH: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayGrid {
    pub window: VisibleWindow,
    pub zoom: Zoom,
    pub days: [NaiveDate; DAYS_PER_WEEK],
    pub day_width_pixels: f64,
    pub total_width_pixels: f64,
    pub day_percentage: f64,
}

impl DayGrid {
    pub fn last_index(&self) -> usize {
        DAYS_PER_WEEK - 1
    }

    /// Column of `day`, if it lies in the grid.
    pub fn index_of(&self, day: NaiveDate) -> Option<usize> {
        self.days.iter().position(|d| *d == day)
    }
}

pub fn build_day_grid(window: &VisibleWindow, zoom: Zoom) -> DayGrid {
    let mut days = [window.start; DAYS_PER_WEEK];
    for (i, slot) in days.iter_mut().enumerate() {
        // i < 7, cannot overflow for any representable window start.
        *slot = window
            .start
            .checked_add_days(Days::new(i as u64))
            .unwrap_or(window.start);
    }

    let day_width_pixels = BASE_DAY_WIDTH * zoom.value();
    DayGrid {
        window: *window,
        zoom,
        days,
        day_width_pixels,
        total_width_pixels: DAYS_PER_WEEK as f64 * day_width_pixels,
        day_percentage: 100.0 / DAYS_PER_WEEK as f64,
    }
}
