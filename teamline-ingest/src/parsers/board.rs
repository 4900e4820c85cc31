//! Board snapshot decoding: raw REST records -> per-user task groups.

use anyhow::{Context, Result};
use chrono_tz::Tz;
use std::fs;
use std::path::Path;
use teamline_core::{Priority, Task, TaskStatus, UserTaskGroup};
use tracing::{debug, warn};

use super::timestamp::parse_timestamp;
use crate::types::{BoardExport, RawTask, RawUser};

pub const UNASSIGNED_ID: &str = "unassigned";

#[derive(Debug, Clone, PartialEq)]
pub struct DecodedBoard {
    pub groups: Vec<UserTaskGroup>,
    /// Tasks that decoded fine but have no creation time (the engine leaves them out).
    pub without_created_at: usize,
}

fn optional_timestamp(
    raw: Option<&str>,
    tz: Tz,
    task_id: &str,
    field: &str,
) -> Result<Option<chrono::NaiveDateTime>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_timestamp(s, tz)
            .map(Some)
            .with_context(|| format!("task {task_id}: invalid {field}")),
    }
}

/// Decode one task record. Missing `createdAt` is tolerated; malformed dates are not.
pub fn decode_task(raw: &RawTask, tz: Tz) -> Result<Task> {
    let id = raw.id.to_string();

    let created_at = optional_timestamp(raw.created_at.as_deref(), tz, &id, "createdAt")?;
    if created_at.is_none() {
        warn!(task_id = %id, "task has no createdAt; it will not be placed on the timeline");
    }

    Ok(Task {
        key: raw.key.clone().unwrap_or_else(|| id.clone()),
        title: raw.title.clone().unwrap_or_default(),
        status: raw
            .status
            .as_deref()
            .map(TaskStatus::parse)
            .unwrap_or(TaskStatus::Todo),
        priority: raw
            .priority
            .as_deref()
            .map(Priority::parse)
            .unwrap_or_default(),
        created_at,
        due_date: optional_timestamp(raw.due_date.as_deref(), tz, &id, "dueDate")?,
        updated_at: optional_timestamp(raw.updated_at.as_deref(), tz, &id, "updatedAt")?,
        parent_task_id: raw.parent_task_id.as_ref().map(ToString::to_string),
        is_overdue: raw.is_overdue,
        is_due_soon: raw.is_due_soon,
        id,
    })
}

fn is_assigned_to(user: &RawUser, assignees: &[String]) -> bool {
    let user_id = user.id.to_string();
    let name = user.display_name.trim();
    assignees.iter().any(|a| {
        let a = a.trim();
        a == user_id || a.eq_ignore_ascii_case(name)
    })
}

/// Build one group per user, in user order. A task shows up under every
/// matching assignee, in task order.
pub fn group_by_assignee(
    users: &[RawUser],
    tasks: &[(Task, Vec<String>)],
    include_unassigned: bool,
) -> Vec<UserTaskGroup> {
    let mut groups: Vec<UserTaskGroup> = users
        .iter()
        .map(|u| UserTaskGroup::new(u.id.to_string(), u.display_name.clone()))
        .collect();
    let mut unassigned = UserTaskGroup::new(UNASSIGNED_ID, "Unassigned");

    for (task, assignees) in tasks {
        let mut matched = false;
        for (user, group) in users.iter().zip(groups.iter_mut()) {
            if is_assigned_to(user, assignees) {
                group.tasks.push(task.clone());
                matched = true;
            }
        }
        if !matched {
            debug!(task_id = %task.id, ?assignees, "task has no known assignee");
            unassigned.tasks.push(task.clone());
        }
    }

    if include_unassigned && !unassigned.tasks.is_empty() {
        groups.push(unassigned);
    }
    groups
}

#[tracing::instrument(skip(export), fields(users = export.users.len(), tasks = export.tasks.len()))]
pub fn decode_board(export: &BoardExport, tz: Tz, include_unassigned: bool) -> Result<DecodedBoard> {
    let mut decoded = Vec::with_capacity(export.tasks.len());
    for raw in &export.tasks {
        decoded.push((decode_task(raw, tz)?, raw.assignees().to_vec()));
    }
    let without_created_at = decoded.iter().filter(|(t, _)| t.created_at.is_none()).count();

    Ok(DecodedBoard {
        groups: group_by_assignee(&export.users, &decoded, include_unassigned),
        without_created_at,
    })
}

pub fn load_board(path: impl AsRef<Path>, tz: Tz, include_unassigned: bool) -> Result<DecodedBoard> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let export: BoardExport =
        serde_json::from_str(&s).with_context(|| format!("parse board export {}", path.display()))?;
    decode_board(&export, tz, include_unassigned)
}
