//! Position calculator: clip a task interval to the grid and derive bar geometry.
//!
//! Algorithm:
//! 1. reject intervals that do not touch `[window.start 00:00, window.end 23:59:59]`
//! 2. clip to the window
//! 3. map the clipped days to grid columns (first column >= start, last column <= end)
//! 4. derive left/width in percent and pixels, with floors so every visible bar
//!    has a positive, clickable width
//!
//! Inverted intervals (end before start) are clipped, not rejected; the floors
//! keep their width positive.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::grid::DayGrid;
use crate::interval::TaskInterval;
use crate::task::Task;

pub const MIN_WIDTH_PERCENT: f64 = 5.0;
pub const MAX_WIDTH_PERCENT: f64 = 100.0;
pub const MIN_WIDTH_PIXELS: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionRecord {
    pub left_percent: f64,
    pub width_percent: f64,
    pub left_pixel: f64,
    pub width_pixel: f64,
    pub clipped_start: NaiveDate,
    pub clipped_end: NaiveDate,
}

/// `None` when the task cannot be placed or lies outside the grid's window.
pub fn compute_position(task: &Task, grid: &DayGrid) -> Option<PositionRecord> {
    let interval = task.effective_interval()?;
    if interval.is_inverted() {
        debug!(task_id = %task.id, start = %interval.start, end = %interval.end, "inverted task interval");
    }
    compute_interval_position(&interval, grid)
}

pub fn compute_interval_position(interval: &TaskInterval, grid: &DayGrid) -> Option<PositionRecord> {
    let window = &grid.window;
    if !interval.overlaps(window) {
        return None;
    }

    let display_start = interval.start.max(window.start);
    let display_end = interval.end.min(window.end);

    let start_index = grid
        .days
        .iter()
        .position(|d| *d >= display_start)
        .unwrap_or(0);
    let end_index = grid
        .days
        .iter()
        .rposition(|d| *d <= display_end)
        .unwrap_or(grid.last_index());

    // Negative for inverted spans; the floors below take over.
    let span_days = end_index as f64 - start_index as f64 + 1.0;

    let base_width_percent = span_days * grid.day_percentage;
    let width_percent =
        (base_width_percent * grid.zoom.value()).clamp(MIN_WIDTH_PERCENT, MAX_WIDTH_PERCENT);
    let width_pixel = (span_days * grid.day_width_pixels).max(MIN_WIDTH_PIXELS);

    Some(PositionRecord {
        left_percent: start_index as f64 * grid.day_percentage,
        width_percent,
        left_pixel: start_index as f64 * grid.day_width_pixels,
        width_pixel,
        clipped_start: display_start,
        clipped_end: display_end,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::build_day_grid;
    use crate::window::{Zoom, resolve_window};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn grid(zoom: f64) -> DayGrid {
        build_day_grid(&resolve_window(day(2024, 6, 10), 0), Zoom::new(zoom).unwrap())
    }

    #[test]
    fn clips_task_started_before_window() {
        let iv = TaskInterval::new(day(2024, 6, 8), day(2024, 6, 12));
        let p = compute_interval_position(&iv, &grid(1.0)).unwrap();
        assert_eq!(p.clipped_start, day(2024, 6, 10));
        assert_eq!(p.clipped_end, day(2024, 6, 12));
        assert_eq!(p.left_percent, 0.0);
        assert!((p.width_percent - 300.0 / 7.0).abs() < 1e-9);
        assert_eq!(p.left_pixel, 0.0);
        assert_eq!(p.width_pixel, 300.0);
    }

    #[test]
    fn outside_window_is_not_visible() {
        let before = TaskInterval::new(day(2024, 6, 1), day(2024, 6, 9));
        let after = TaskInterval::new(day(2024, 6, 17), day(2024, 6, 18));
        assert!(compute_interval_position(&before, &grid(1.0)).is_none());
        assert!(compute_interval_position(&after, &grid(1.0)).is_none());
    }

    #[test]
    fn boundary_touching_tasks_are_visible() {
        let ends_on_monday = TaskInterval::new(day(2024, 6, 3), day(2024, 6, 10));
        let p = compute_interval_position(&ends_on_monday, &grid(1.0)).unwrap();
        assert_eq!(p.left_percent, 0.0);
        assert!((p.width_percent - 100.0 / 7.0).abs() < 1e-9);

        let starts_on_sunday = TaskInterval::new(day(2024, 6, 16), day(2024, 6, 20));
        let p = compute_interval_position(&starts_on_sunday, &grid(1.0)).unwrap();
        assert!((p.left_percent - 600.0 / 7.0).abs() < 1e-9);
        assert_eq!(p.left_pixel, 600.0);
        assert!(p.width_percent >= MIN_WIDTH_PERCENT);
    }

    #[test]
    fn task_covering_window_fills_grid() {
        let iv = TaskInterval::new(day(2024, 5, 1), day(2024, 7, 1));
        let p = compute_interval_position(&iv, &grid(2.0)).unwrap();
        assert_eq!(p.left_percent, 0.0);
        assert_eq!(p.width_percent, 100.0);
        assert_eq!(p.width_pixel, 1400.0);
    }

    #[test]
    fn zero_length_task_gets_pixel_floor() {
        let iv = TaskInterval::new(day(2024, 6, 13), day(2024, 6, 13));
        let p = compute_interval_position(&iv, &grid(0.5)).unwrap();
        // one day at zoom 0.5 is 50px; floor lifts it
        assert_eq!(p.width_pixel, MIN_WIDTH_PIXELS);
        assert!((p.width_percent - 100.0 / 14.0).abs() < 1e-9);
    }

    #[test]
    fn inverted_interval_yields_floor_width_bar() {
        let iv = TaskInterval::new(day(2024, 6, 16), day(2024, 6, 10));
        let p = compute_interval_position(&iv, &grid(1.0)).unwrap();
        assert_eq!(p.width_percent, MIN_WIDTH_PERCENT);
        assert_eq!(p.width_pixel, MIN_WIDTH_PIXELS);
        assert!(p.left_percent >= 0.0);
    }

    #[test]
    fn task_without_created_at_has_no_position() {
        let t = Task::new("t", "no start");
        assert!(compute_position(&t, &grid(1.0)).is_none());
    }
}
