//! Effective date interval of a task.
//!
//! Derived, never stored:
//! - start = day of `created_at`
//! - end   = day of `due_date`, else `updated_at`, else start + 1 day
//!
//! `end >= start` is not guaranteed (a due date can precede creation). Consumers
//! must clip rather than assume ordering.

use chrono::{Days, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::task::Task;
use crate::time::{day_end, day_start};
use crate::window::VisibleWindow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskInterval {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TaskInterval {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn start_at(&self) -> NaiveDateTime {
        day_start(self.start)
    }

    pub fn end_at(&self) -> NaiveDateTime {
        day_end(self.end)
    }

    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }

    /// Inclusive overlap with `window`: touching either boundary counts.
    pub fn overlaps(&self, window: &VisibleWindow) -> bool {
        !(self.end < window.start || self.start > window.end)
    }

    pub fn contains_day(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }
}

impl Task {
    /// `None` when the task has no creation time and so cannot be placed.
    pub fn effective_interval(&self) -> Option<TaskInterval> {
        let start = self.created_at?.date();
        let end = self
            .due_date
            .or(self.updated_at)
            .map(|dt| dt.date())
            .unwrap_or_else(|| start.checked_add_days(Days::new(1)).unwrap_or(start));
        Some(TaskInterval { start, end })
    }
}
