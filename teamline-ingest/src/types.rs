use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifiers come back as strings from some endpoints and integers from others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Text(String),
    Number(i64),
}

impl fmt::Display for RawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawId::Text(s) => f.write_str(s),
            RawId::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Task as returned by the task/board endpoints. Timestamps stay raw strings
/// until decoded against the board timezone.
///
/// Every field but `id` may be missing or `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTask {
    pub id: RawId,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub assignee_names: Option<Vec<String>>,
    #[serde(default)]
    pub parent_task_id: Option<RawId>,
    #[serde(default)]
    pub is_overdue: Option<bool>,
    #[serde(default)]
    pub is_due_soon: Option<bool>,
}

/// Team member record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUser {
    pub id: RawId,
    #[serde(alias = "name")]
    pub display_name: String,
}

impl RawTask {
    pub fn assignees(&self) -> &[String] {
        self.assignee_names.as_deref().unwrap_or_default()
    }
}

/// A board snapshot: members plus every task on the board.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardExport {
    #[serde(default)]
    pub users: Vec<RawUser>,
    #[serde(default)]
    pub tasks: Vec<RawTask>,
}
