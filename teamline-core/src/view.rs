//! Caller-owned navigation state.
//!
//! The engine never keeps this between calls; the UI layer holds a `ViewState`
//! and passes it in on every layout.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::rows::toggle_expanded;
use crate::task::UserTaskGroup;
use crate::window::Zoom;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub week_offset: i32,
    pub zoom: Zoom,
    pub expanded: BTreeSet<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_zoom(mut self, zoom: Zoom) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_week_offset(mut self, week_offset: i32) -> Self {
        self.week_offset = week_offset;
        self
    }

    pub fn with_expanded<I, S>(mut self, users: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expanded.extend(users.into_iter().map(Into::into));
        self
    }

    pub fn next_week(&mut self) {
        self.week_offset = self.week_offset.saturating_add(1);
    }

    pub fn prev_week(&mut self) {
        self.week_offset = self.week_offset.saturating_sub(1);
    }

    pub fn reset_week(&mut self) {
        self.week_offset = 0;
    }

    pub fn zoom_in(&mut self) {
        self.zoom = self.zoom.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.zoom_out();
    }

    pub fn is_expanded(&self, user_id: &str) -> bool {
        self.expanded.contains(user_id)
    }

    /// Returns whether the user is expanded afterwards.
    pub fn toggle_user(&mut self, user_id: &str) -> bool {
        toggle_expanded(&mut self.expanded, user_id)
    }

    pub fn expand_all(&mut self, groups: &[UserTaskGroup]) {
        self.expanded
            .extend(groups.iter().map(|g| g.user_id.clone()));
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }
}
