//! Plain-text rendering for terminal output.

use chrono::NaiveDate;
use std::fmt::Write;
use teamline_core::{
    DayGrid, PositionRecord, TimelineLayout, UserTaskGroup, classify_urgency,
    relevant_task_count,
};

use crate::config::ViewSection;

pub fn render_grid(grid: &DayGrid) -> String {
    let mut s = String::new();
    let _ = writeln!(
        s,
        "Week {} (zoom {:.2}, {:.0}px/day, {:.0}px total)",
        grid.window, grid.zoom.value(), grid.day_width_pixels, grid.total_width_pixels
    );
    for (i, d) in grid.days.iter().enumerate() {
        let _ = writeln!(
            s,
            "  {i}  {} {}  left {:>5.1}%  {:>6.0}px",
            d.format("%a"),
            d,
            i as f64 * grid.day_percentage,
            i as f64 * grid.day_width_pixels
        );
    }
    s
}

/// Seven-column strip with `#` on the days a bar covers.
fn day_strip(grid: &DayGrid, p: &PositionRecord) -> String {
    grid.days
        .iter()
        .map(|d| {
            if *d >= p.clipped_start && *d <= p.clipped_end {
                '#'
            } else {
                '.'
            }
        })
        .collect()
}

pub fn render_layout(layout: &TimelineLayout, view: &ViewSection) -> String {
    let mut s = render_grid(&layout.grid);
    s.push('\n');

    if layout.lanes.is_empty() {
        s.push_str("Nothing to render.\n");
        return s;
    }

    for lane in &layout.lanes {
        let state = if lane.visible_task_count > 0 { "expanded" } else { "collapsed" };
        let _ = writeln!(
            s,
            "[row {:>3}] {} ({} in window, {} today) {}",
            lane.start_row, lane.display_name, lane.in_window_count, lane.today_count, state
        );
        for bar in &lane.bars {
            let p = &bar.position;
            let _ = writeln!(
                s,
                "  row {:>3}  {} {:<10} {:<28} {:>5.1}% +{:>5.1}%  {:>5.0}px +{:>5.0}px  {}  {}..{}",
                bar.row,
                day_strip(&layout.grid, p),
                bar.key,
                truncate(&bar.title, 28),
                p.left_percent,
                p.width_percent,
                p.left_pixel,
                p.width_pixel,
                bar.urgency.as_str(),
                p.clipped_start,
                p.clipped_end,
            );
        }
    }

    let _ = writeln!(
        s,
        "\n{} rows, viewport {}px",
        layout.total_rows,
        layout.viewport_height(view.row_height, view.row_margin)
    );
    s
}

pub fn render_urgency(groups: &[UserTaskGroup], today: NaiveDate) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "Urgency as of {today}");
    for g in groups {
        let _ = writeln!(s, "{}", g.display_name);
        for t in &g.tasks {
            let due = t
                .due_date
                .map(|d| d.date().to_string())
                .unwrap_or_else(|| "-".to_string());
            let _ = writeln!(
                s,
                "  {:<10} {:<12} due {:<10} {}",
                t.key,
                t.status,
                due,
                classify_urgency(t, today).as_str()
            );
        }
    }
    s
}

pub fn render_ranking(ranked: &[UserTaskGroup], reference: NaiveDate) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "Users ranked for {reference}");
    for (i, g) in ranked.iter().enumerate() {
        let _ = writeln!(
            s,
            "{:>3}. {:<24} relevant {:>3}  total {:>3}",
            i + 1,
            g.display_name,
            relevant_task_count(g, reference),
            g.total_count()
        );
    }
    s
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('~');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use teamline_core::{LayoutOptions, Task, ViewState, Zoom, build_day_grid, build_timeline, resolve_window};

    fn at(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, d)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    #[test]
    fn grid_lists_seven_days() {
        let grid = build_day_grid(&resolve_window(monday(), 0), Zoom::default());
        let out = render_grid(&grid);
        assert!(out.starts_with("Week 2024-06-10..2024-06-16"));
        assert_eq!(out.lines().count(), 8);
        assert!(out.contains("Sun 2024-06-16"));
    }

    #[test]
    fn layout_shows_bars_for_expanded_users() {
        let groups = vec![UserTaskGroup::new("u", "Ana").with_tasks(vec![
            Task::new("1", "Design").with_key("WEB-1").with_created_at(at(8)).with_due_date(at(12)),
        ])];
        let view = ViewState::new().with_expanded(["u"]);
        let layout = build_timeline(&groups, &view, monday(), monday(), LayoutOptions::default());
        let out = render_layout(&layout, &ViewSection::default());
        assert!(out.contains("###...."), "{out}");
        assert!(out.contains("WEB-1"));
        assert!(out.contains("dueSoon"));
        assert!(out.contains("1 rows, viewport 100px"));
    }

    #[test]
    fn empty_layout_says_so() {
        let layout = build_timeline(&[], &ViewState::new(), monday(), monday(), LayoutOptions::default());
        assert!(render_layout(&layout, &ViewSection::default()).contains("Nothing to render."));
    }

    #[test]
    fn ranking_prints_counts() {
        let g = UserTaskGroup::new("u", "Ana")
            .with_tasks(vec![Task::new("1", "x").with_created_at(at(10))]);
        let out = render_ranking(&[g], monday());
        assert!(out.contains("relevant   1"), "{out}");
    }

    #[test]
    fn truncates_long_titles() {
        assert_eq!(truncate("abcdef", 4), "abc~");
        assert_eq!(truncate("abc", 4), "abc");
    }
}
