//! teamline-core: task timeline layout engine for the multi-user schedule view.
//!
//! Pure data transformation. Given users, their tasks and caller-owned view
//! state, it resolves the visible week, clips task intervals to it, derives bar
//! geometry and urgency, and assigns rows. No I/O, no retained state.

pub mod filter;
pub mod grid;
pub mod interval;
pub mod layout;
pub mod position;
pub mod ranking;
pub mod rows;
pub mod task;
pub mod time;
pub mod urgency;
pub mod view;
pub mod window;

pub use filter::{filter_to_window, is_in_window};
pub use grid::{BASE_DAY_WIDTH, DayGrid, build_day_grid};
pub use interval::TaskInterval;
pub use layout::{LayoutOptions, TaskBar, TimelineLayout, UserLane, build_timeline, present_expanded};
pub use position::{
    MAX_WIDTH_PERCENT, MIN_WIDTH_PERCENT, MIN_WIDTH_PIXELS, PositionRecord, compute_interval_position,
    compute_position,
};
pub use ranking::{is_relevant_on, rank_users, relevant_task_count};
pub use rows::{
    RowLayout, RowPosition, layout_filtered_rows, layout_rows, toggle_expanded, viewport_height,
};
pub use task::{Priority, Task, TaskStatus, UserTaskGroup};
pub use urgency::{DUE_SOON_DAYS, Urgency, classify_urgency};
pub use view::ViewState;
pub use window::{DAYS_PER_WEEK, VisibleWindow, Zoom, checked_resolve_window, resolve_window};
