use serde::{Deserialize, Serialize};

/// Resource families that keep a change history.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HistoryKind {
    Userstory,
    Task,
    Issue,
    Wiki,
}

impl HistoryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            HistoryKind::Userstory => "userstory",
            HistoryKind::Task => "task",
            HistoryKind::Issue => "issue",
            HistoryKind::Wiki => "wiki",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HistoryUser {
    pub pk: serde_json::Value,
    pub username: String,
    pub name: String,
    pub photo: Option<String>,
    pub gravatar_id: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HistoryEntry {
    pub id: String,
    pub key: String,
    #[serde(rename = "type")]
    pub kind: serde_json::Value,
    pub user: HistoryUser,
    pub created_at: String,
    pub comment: String,
    pub comment_html: String,
    pub is_hidden: bool,
    pub is_snapshot: bool,
    pub snapshot: Option<serde_json::Value>,
    pub diff: serde_json::Value,
    pub values: serde_json::Value,
    pub values_diff: serde_json::Value,
    pub edit_comment_date: Option<String>,
    pub delete_comment_date: Option<String>,
    pub delete_comment_user: Option<serde_json::Value>,
}
