//! Timeline layout pipeline.
//!
//! Wires the individual stages together in render order:
//! window -> day grid -> cross-window filter -> (ranking) -> rows -> bars.
//!
//! Pure function of its inputs; nothing is cached between calls.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, warn};

use crate::filter::filter_to_window;
use crate::grid::{DayGrid, build_day_grid};
use crate::position::{PositionRecord, compute_position};
use crate::ranking::{rank_users, relevant_task_count};
use crate::rows::{layout_filtered_rows, viewport_height};
use crate::task::UserTaskGroup;
use crate::urgency::{Urgency, classify_urgency};
use crate::view::ViewState;
use crate::window::{VisibleWindow, resolve_window};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutOptions {
    /// Reorder users by what is on their plate today before assigning rows.
    pub rank_users: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskBar {
    pub task_id: String,
    pub key: String,
    pub title: String,
    /// Absolute row in the shared vertical space.
    pub row: usize,
    pub position: PositionRecord,
    pub urgency: Urgency,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserLane {
    pub user_id: String,
    pub display_name: String,
    pub start_row: usize,
    pub visible_task_count: usize,
    pub in_window_count: usize,
    pub today_count: usize,
    pub bars: Vec<TaskBar>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineLayout {
    pub window: VisibleWindow,
    pub grid: DayGrid,
    pub lanes: Vec<UserLane>,
    pub total_rows: usize,
}

impl TimelineLayout {
    pub fn is_empty(&self) -> bool {
        self.total_rows == 0
    }

    pub fn bar_count(&self) -> usize {
        self.lanes.iter().map(|l| l.bars.len()).sum()
    }

    pub fn viewport_height(&self, row_height: u32, margin: u32) -> u64 {
        viewport_height(self.total_rows, row_height, margin)
    }
}

/// Lay out `groups` for the week selected by `view` relative to `reference`.
///
/// `today` drives urgency and the per-user "today" counters (and ranking when
/// enabled). It is usually the same day as `reference`, but callers that
/// anchor navigation on some other date pass both.
#[tracing::instrument(skip(groups, view), fields(users = groups.len(), week_offset = view.week_offset, zoom = view.zoom.value()))]
pub fn build_timeline(
    groups: &[UserTaskGroup],
    view: &ViewState,
    reference: NaiveDate,
    today: NaiveDate,
    options: LayoutOptions,
) -> TimelineLayout {
    let window = resolve_window(reference, view.week_offset);
    let grid = build_day_grid(&window, view.zoom);

    let mut filtered = filter_to_window(groups, &window);
    if options.rank_users {
        filtered = rank_users(&filtered, today);
    }

    let rows = layout_filtered_rows(&filtered, &view.expanded);

    let lanes: Vec<UserLane> = filtered
        .iter()
        .zip(&rows.rows)
        .map(|(group, row)| lane_for(group, row.start_row, row.visible_task_count, &grid, today))
        .collect();

    debug!(
        window = %window,
        total_rows = rows.total_rows,
        bars = lanes.iter().map(|l| l.bars.len()).sum::<usize>(),
        "timeline laid out"
    );

    TimelineLayout {
        window,
        grid,
        lanes,
        total_rows: rows.total_rows,
    }
}

fn lane_for(
    group: &UserTaskGroup,
    start_row: usize,
    visible_task_count: usize,
    grid: &DayGrid,
    today: NaiveDate,
) -> UserLane {
    let mut bars = Vec::with_capacity(visible_task_count);
    if visible_task_count > 0 {
        for (offset, task) in group.tasks.iter().enumerate() {
            let Some(position) = compute_position(task, grid) else {
                // The filter and the calculator share one overlap test.
                warn!(task_id = %task.id, "filtered task has no position");
                continue;
            };
            bars.push(TaskBar {
                task_id: task.id.clone(),
                key: task.key.clone(),
                title: task.title.clone(),
                row: start_row + offset,
                position,
                urgency: classify_urgency(task, today),
            });
        }
    }

    UserLane {
        user_id: group.user_id.clone(),
        display_name: group.display_name.clone(),
        start_row,
        visible_task_count,
        in_window_count: group.tasks.len(),
        today_count: relevant_task_count(group, today),
        bars,
    }
}

/// The part of `expanded` that names users present in `groups`.
pub fn present_expanded(groups: &[UserTaskGroup], expanded: &BTreeSet<String>) -> BTreeSet<String> {
    groups
        .iter()
        .filter(|g| expanded.contains(&g.user_id))
        .map(|g| g.user_id.clone())
        .collect()
}
