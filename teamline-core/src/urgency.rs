//! Due-date urgency classification.
//!
//! Precedence, strictly in order:
//! 1. done tasks are never urgent
//! 2. backend flags (`is_overdue`, then `is_due_soon`) when true
//! 3. no due date: not urgent
//! 4. calendar-day distance from today: < 0 overdue, 0..=3 due soon

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::task::{Task, TaskStatus};
use crate::time::days_between;

/// Inclusive horizon, in days, for "due soon".
pub const DUE_SOON_DAYS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Urgency {
    #[serde(rename = "none")]
    Normal,
    DueSoon,
    Overdue,
}

impl Urgency {
    pub fn as_str(self) -> &'static str {
        match self {
            Urgency::Normal => "none",
            Urgency::DueSoon => "dueSoon",
            Urgency::Overdue => "overdue",
        }
    }
}

pub fn classify_urgency(task: &Task, today: NaiveDate) -> Urgency {
    if task.status.is_done() {
        return Urgency::Normal;
    }
    if task.is_overdue == Some(true) {
        return Urgency::Overdue;
    }
    if task.is_due_soon == Some(true) {
        return Urgency::DueSoon;
    }

    let Some(due) = task.due_date else {
        return Urgency::Normal;
    };

    if let TaskStatus::Unknown(raw) = &task.status {
        trace!(task_id = %task.id, status = %raw, "unknown status, classifying by due date");
    }

    match days_between(today, due.date()) {
        d if d < 0 => Urgency::Overdue,
        d if d <= DUE_SOON_DAYS => Urgency::DueSoon,
        _ => Urgency::Normal,
    }
}
