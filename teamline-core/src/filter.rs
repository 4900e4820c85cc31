//! Cross-window filter: keep only tasks the current week would render.
//!
//! Runs before row layout so row counts reflect in-window tasks only.

use tracing::debug;

use crate::task::{Task, UserTaskGroup};
use crate::window::VisibleWindow;

pub fn is_in_window(task: &Task, window: &VisibleWindow) -> bool {
    match task.effective_interval() {
        Some(iv) => iv.overlaps(window),
        None => {
            debug!(task_id = %task.id, "task has no created_at, excluded from layout");
            false
        }
    }
}

/// Same users, same order; each user's tasks reduced to those overlapping `window`.
#[tracing::instrument(skip(groups, window), fields(users = groups.len(), window = %window))]
pub fn filter_to_window(groups: &[UserTaskGroup], window: &VisibleWindow) -> Vec<UserTaskGroup> {
    groups
        .iter()
        .map(|g| UserTaskGroup {
            user_id: g.user_id.clone(),
            display_name: g.display_name.clone(),
            tasks: g
                .tasks
                .iter()
                .filter(|t| is_in_window(t, window))
                .cloned()
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::resolve_window;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, m, d)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[test]
    fn keeps_user_order_and_drops_out_of_window_tasks() {
        let window = resolve_window(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(), 0);
        let groups = vec![
            UserTaskGroup::new("u1", "Ana").with_tasks(vec![
                Task::new("a", "in").with_created_at(at(6, 11)),
                Task::new("b", "old").with_created_at(at(5, 1)).with_due_date(at(5, 3)),
                Task::new("c", "unplaceable"),
            ]),
            UserTaskGroup::new("u2", "Bo"),
        ];

        let out = filter_to_window(&groups, &window);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].user_id, "u1");
        assert_eq!(out[0].tasks.len(), 1);
        assert_eq!(out[0].tasks[0].id, "a");
        assert_eq!(out[1].user_id, "u2");
        assert!(out[1].tasks.is_empty());
        // source untouched
        assert_eq!(groups[0].tasks.len(), 3);
    }
}
