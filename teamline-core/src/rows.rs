//! Row layout: one shared vertical coordinate space for all user groups.
//!
//! Collapsed users (and expanded users with nothing in the window) take exactly
//! one header row; expanded users take one row per in-window task. Rows are
//! assigned in user order with no gaps and no overlaps.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::trace;

use crate::filter::filter_to_window;
use crate::task::UserTaskGroup;
use crate::window::VisibleWindow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowPosition {
    pub user_id: String,
    pub start_row: usize,
    pub visible_task_count: usize,
}

impl RowPosition {
    /// Rows this user occupies (never zero).
    pub fn row_span(&self) -> usize {
        self.visible_task_count.max(1)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowLayout {
    pub rows: Vec<RowPosition>,
    pub total_rows: usize,
}

impl RowLayout {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, user_id: &str) -> Option<&RowPosition> {
        self.rows.iter().find(|r| r.user_id == user_id)
    }

    pub fn viewport_height(&self, row_height: u32, margin: u32) -> u64 {
        viewport_height(self.total_rows, row_height, margin)
    }
}

/// Pixel height of the scrollable area; zero when there is nothing to render.
pub fn viewport_height(total_rows: usize, row_height: u32, margin: u32) -> u64 {
    if total_rows == 0 {
        return 0;
    }
    total_rows as u64 * u64::from(row_height) + u64::from(margin)
}

/// Flip one user's membership in the expanded set. Returns the new state.
pub fn toggle_expanded(expanded: &mut BTreeSet<String>, user_id: &str) -> bool {
    if expanded.remove(user_id) {
        false
    } else {
        expanded.insert(user_id.to_string());
        true
    }
}

/// Filter `groups` to `window`, then assign rows.
pub fn layout_rows(
    groups: &[UserTaskGroup],
    expanded: &BTreeSet<String>,
    window: &VisibleWindow,
) -> RowLayout {
    layout_filtered_rows(&filter_to_window(groups, window), expanded)
}

/// Assign rows to groups that have already been through the window filter.
#[tracing::instrument(skip(groups, expanded), fields(users = groups.len(), expanded = expanded.len()))]
pub fn layout_filtered_rows(groups: &[UserTaskGroup], expanded: &BTreeSet<String>) -> RowLayout {
    let mut running = 0usize;
    let mut rows = Vec::with_capacity(groups.len());

    for g in groups {
        let visible_task_count = if expanded.contains(&g.user_id) {
            g.tasks.len()
        } else {
            0
        };
        let row = RowPosition {
            user_id: g.user_id.clone(),
            start_row: running,
            visible_task_count,
        };
        running += row.row_span();
        trace!(user_id = %g.user_id, start_row = row.start_row, visible_task_count, "row assigned");
        rows.push(row);
    }

    RowLayout {
        rows,
        total_rows: running,
    }
}
