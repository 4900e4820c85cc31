use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use std::collections::BTreeSet;
use teamline_core::{
    MIN_WIDTH_PIXELS, Task, TaskInterval, TaskStatus, Urgency, UserTaskGroup, Zoom, build_day_grid,
    classify_urgency, compute_interval_position, layout_rows, rank_users, resolve_window,
};

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn day_at(offset: i64) -> NaiveDate {
    epoch() + chrono::TimeDelta::days(offset)
}

fn time_at(offset: i64) -> NaiveDateTime {
    day_at(offset).and_hms_opt(12, 0, 0).unwrap()
}

fn zoom_strategy() -> impl Strategy<Value = Zoom> {
    (50u32..=200).prop_map(|z| Zoom::new(f64::from(z) / 100.0).unwrap())
}

proptest! {
    #[test]
    fn prop_window_round_trip(offset in -2000i64..2000, weeks in -50i32..50) {
        let d = day_at(offset);
        let forward = resolve_window(d, weeks);
        let back = resolve_window(forward.start, -weeks);
        prop_assert_eq!(back, resolve_window(d, 0));
        prop_assert_eq!((forward.end - forward.start).num_days(), 6);
    }

    #[test]
    fn prop_grid_has_seven_consecutive_days(offset in -2000i64..2000, zoom in zoom_strategy()) {
        let grid = build_day_grid(&resolve_window(day_at(offset), 0), zoom);
        prop_assert_eq!(grid.days.len(), 7);
        for pair in grid.days.windows(2) {
            prop_assert_eq!((pair[1] - pair[0]).num_days(), 1);
        }
    }

    #[test]
    fn prop_visible_bars_respect_floors(
        start in -30i64..30,
        len in -10i64..40,
        zoom in zoom_strategy(),
    ) {
        let grid = build_day_grid(&resolve_window(epoch(), 0), zoom);
        let iv = TaskInterval::new(day_at(start), day_at(start + len));
        if let Some(p) = compute_interval_position(&iv, &grid) {
            prop_assert!(p.width_percent >= 5.0 && p.width_percent <= 100.0);
            prop_assert!(p.width_pixel >= MIN_WIDTH_PIXELS);
            prop_assert!(p.left_percent >= 0.0);
        }
    }

    #[test]
    fn prop_done_is_never_urgent(
        due in proptest::option::of(-20i64..20),
        overdue in proptest::option::of(any::<bool>()),
        soon in proptest::option::of(any::<bool>()),
    ) {
        let mut t = Task::new("t", "x").with_status(TaskStatus::Done);
        t.due_date = due.map(time_at);
        t.is_overdue = overdue;
        t.is_due_soon = soon;
        prop_assert_eq!(classify_urgency(&t, epoch()), Urgency::Normal);
    }

    #[test]
    fn prop_rows_strictly_increase(
        counts in proptest::collection::vec(0usize..5, 0..8),
        expanded_mask in proptest::collection::vec(any::<bool>(), 8),
    ) {
        let window = resolve_window(epoch(), 0);
        let groups: Vec<UserTaskGroup> = counts
            .iter()
            .enumerate()
            .map(|(i, n)| {
                let tasks = (0..*n)
                    .map(|j| Task::new(format!("{i}-{j}"), "t").with_created_at(time_at(0)))
                    .collect();
                UserTaskGroup::new(format!("u{i}"), "U").with_tasks(tasks)
            })
            .collect();
        let expanded: BTreeSet<String> = (0..counts.len())
            .filter(|i| expanded_mask[*i])
            .map(|i| format!("u{i}"))
            .collect();

        let layout = layout_rows(&groups, &expanded, &window);
        for pair in layout.rows.windows(2) {
            prop_assert!(pair[0].start_row < pair[1].start_row);
            prop_assert_eq!(pair[1].start_row, pair[0].start_row + pair[0].visible_task_count.max(1));
        }
        let sum: usize = layout.rows.iter().map(|r| r.visible_task_count.max(1)).sum();
        prop_assert_eq!(layout.total_rows, sum);
    }

    #[test]
    fn prop_ranking_is_stable_for_equal_keys(n in 1usize..10) {
        let groups: Vec<UserTaskGroup> = (0..n)
            .map(|i| {
                UserTaskGroup::new(format!("u{i}"), "U")
                    .with_tasks(vec![Task::new(format!("t{i}"), "t").with_created_at(time_at(0))])
            })
            .collect();
        let ranked = rank_users(&groups, epoch());
        let ids: Vec<String> = ranked.iter().map(|g| g.user_id.clone()).collect();
        let want: Vec<String> = groups.iter().map(|g| g.user_id.clone()).collect();
        prop_assert_eq!(ids, want);
    }
}

#[test]
fn window_end_boundary_task_is_visible() {
    let window = resolve_window(epoch(), 0);
    let grid = build_day_grid(&window, Zoom::default());
    let iv = TaskInterval::new(window.end, window.end);
    let p = compute_interval_position(&iv, &grid).unwrap();
    assert!(p.width_percent >= 5.0);
}
