//! Task model consumed by the timeline engine.
//!
//! Records arrive read-only from the board/task endpoints (see `teamline-ingest`);
//! the engine never mutates them.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow status of a task.
///
/// The board uses a fixed set of columns, but status strings are open-ended
/// elsewhere in the product, so anything unrecognised is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Review,
    Fix,
    Done,
    Unknown(String),
}

impl TaskStatus {
    /// Lenient parse; never fails.
    pub fn parse(raw: &str) -> Self {
        let norm = raw.trim().to_lowercase().replace(['-', ' '], "_");
        match norm.as_str() {
            "todo" | "to_do" => TaskStatus::Todo,
            "in_progress" | "inprogress" => TaskStatus::InProgress,
            "review" | "in_review" => TaskStatus::Review,
            "fix" => TaskStatus::Fix,
            "done" => TaskStatus::Done,
            _ => TaskStatus::Unknown(raw.trim().to_string()),
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, TaskStatus::Done)
    }

    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Review => "review",
            TaskStatus::Fix => "fix",
            TaskStatus::Done => "done",
            TaskStatus::Unknown(s) => s,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Lowest,
    Low,
    #[default]
    Medium,
    High,
    Highest,
}

impl Priority {
    /// Unrecognised values fall back to `Medium`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "lowest" | "trivial" => Priority::Lowest,
            "low" | "minor" => Priority::Low,
            "high" | "major" => Priority::High,
            "highest" | "critical" | "blocker" | "urgent" => Priority::Highest,
            _ => Priority::Medium,
        }
    }
}

/// Core task record.
///
/// Timestamps are wall-clock times in the board's timezone; the engine only
/// ever looks at their calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    /// Human-facing key such as `WEB-142`.
    pub key: String,
    pub title: String,

    pub status: TaskStatus,
    pub priority: Priority,

    /// Tasks without a creation time cannot be placed and are left out of layout.
    pub created_at: Option<NaiveDateTime>,
    pub due_date: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,

    pub parent_task_id: Option<String>,

    /// Backend-computed flags. When set they override date-derived urgency.
    pub is_overdue: Option<bool>,
    pub is_due_soon: Option<bool>,
}

impl Task {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            key: id.clone(),
            id,
            title: title.into(),
            status: TaskStatus::Todo,
            priority: Priority::Medium,
            created_at: None,
            due_date: None,
            updated_at: None,
            parent_task_id: None,
            is_overdue: None,
            is_due_soon: None,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_created_at(mut self, created_at: NaiveDateTime) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn with_due_date(mut self, due_date: NaiveDateTime) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_updated_at(mut self, updated_at: NaiveDateTime) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    pub fn with_parent(mut self, parent_task_id: impl Into<String>) -> Self {
        self.parent_task_id = Some(parent_task_id.into());
        self
    }

    pub fn with_overdue_flag(mut self, flag: bool) -> Self {
        self.is_overdue = Some(flag);
        self
    }

    pub fn with_due_soon_flag(mut self, flag: bool) -> Self {
        self.is_due_soon = Some(flag);
        self
    }
}

/// One user's tasks, in the order the caller supplied them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserTaskGroup {
    pub user_id: String,
    pub display_name: String,
    pub tasks: Vec<Task>,
}

impl UserTaskGroup {
    pub fn new(user_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: display_name.into(),
            tasks: Vec::new(),
        }
    }

    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = tasks;
        self
    }

    pub fn total_count(&self) -> usize {
        self.tasks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_board_statuses() {
        assert_eq!(TaskStatus::parse("todo"), TaskStatus::Todo);
        assert_eq!(TaskStatus::parse("in_progress"), TaskStatus::InProgress);
        assert_eq!(TaskStatus::parse("In-Progress"), TaskStatus::InProgress);
        assert_eq!(TaskStatus::parse("REVIEW"), TaskStatus::Review);
        assert_eq!(TaskStatus::parse("fix"), TaskStatus::Fix);
        assert_eq!(TaskStatus::parse(" done "), TaskStatus::Done);
    }

    #[test]
    fn keeps_unknown_status_verbatim() {
        let s = TaskStatus::parse("blocked");
        assert_eq!(s, TaskStatus::Unknown("blocked".to_string()));
        assert!(!s.is_done());
        assert_eq!(s.to_string(), "blocked");
    }

    #[test]
    fn priority_defaults_to_medium() {
        assert_eq!(Priority::parse("HIGH"), Priority::High);
        assert_eq!(Priority::parse("blocker"), Priority::Highest);
        assert_eq!(Priority::parse("whenever"), Priority::Medium);
    }

    #[test]
    fn new_task_uses_id_as_key() {
        let t = Task::new("42", "Ship it").with_key("WEB-42");
        assert_eq!(t.id, "42");
        assert_eq!(t.key, "WEB-42");
        assert!(t.created_at.is_none());
    }
}
