//! User ranking for the multi-user view.
//!
//! Order:
//! - tasks relevant to the reference day DESC
//! - total task count DESC
//! - original order (stable sort), so re-renders over unchanged data never reshuffle

use chrono::NaiveDate;

use crate::task::{Task, UserTaskGroup};

/// A task is relevant to `day` if it is due that day or its interval covers it.
pub fn is_relevant_on(task: &Task, day: NaiveDate) -> bool {
    let due_that_day = task.due_date.is_some_and(|d| d.date() == day);
    due_that_day
        || task
            .effective_interval()
            .is_some_and(|iv| iv.contains_day(day))
}

pub fn relevant_task_count(group: &UserTaskGroup, day: NaiveDate) -> usize {
    group.tasks.iter().filter(|t| is_relevant_on(t, day)).count()
}

#[tracing::instrument(skip(groups, reference), fields(users = groups.len(), reference = %reference))]
pub fn rank_users(groups: &[UserTaskGroup], reference: NaiveDate) -> Vec<UserTaskGroup> {
    let mut keyed: Vec<(usize, usize, &UserTaskGroup)> = groups
        .iter()
        .map(|g| (relevant_task_count(g, reference), g.total_count(), g))
        .collect();

    // sort_by is stable
    keyed.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| b.1.cmp(&a.1)));

    keyed.into_iter().map(|(_, _, g)| g.clone()).collect()
}
