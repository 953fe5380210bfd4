use serde::{Deserialize, Serialize};

use super::common::{ProjectBriefInfo, ProjectExtraInfo, UserExtraInfo};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StatusExtraInfo {
    pub name: String,
    pub color: String,
    pub is_closed: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Epic {
    pub id: u64,
    #[serde(rename = "ref")]
    pub reference: u64,
    pub subject: String,
    pub color: String,
    pub project: ProjectBriefInfo,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UserStoryExtraInfo {
    pub id: u64,
    #[serde(rename = "ref")]
    pub reference: u64,
    pub subject: String,
    pub epics: Option<Vec<Epic>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Task {
    pub id: u64,
    #[serde(rename = "ref")]
    pub reference: u64,
    pub subject: String,
    pub version: u64,
    pub project: u64,
    pub project_extra_info: ProjectExtraInfo,
    pub status: Option<u64>,
    pub status_extra_info: Option<StatusExtraInfo>,
    pub user_story: Option<u64>,
    pub user_story_extra_info: Option<UserStoryExtraInfo>,
    pub milestone: Option<u64>,
    pub milestone_slug: Option<String>,
    pub owner: Option<u64>,
    pub owner_extra_info: Option<UserExtraInfo>,
    pub assigned_to: Option<u64>,
    pub assigned_to_extra_info: Option<UserExtraInfo>,
    pub attachments: Vec<serde_json::Value>,
    pub tags: Vec<Vec<Option<String>>>,
    pub watchers: Vec<u64>,
    pub is_blocked: bool,
    pub blocked_note: String,
    pub is_closed: bool,
    pub is_iocaine: bool,
    pub is_voter: bool,
    pub is_watcher: bool,
    pub created_date: String,
    pub modified_date: String,
    pub finished_date: Option<String>,
    pub due_date: Option<String>,
    pub due_date_reason: String,
    pub due_date_status: String,
    pub external_reference: Option<serde_json::Value>,
    pub taskboard_order: i64,
    pub us_order: i64,
    pub total_comments: u64,
    pub total_voters: u64,
    pub total_watchers: u64,
}

/// Filters for the task list. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub project: Option<u64>,
    pub status: Option<u64>,
    pub tags: Option<Vec<String>>,
    pub user_story: Option<u64>,
    pub role: Option<u64>,
    pub owner: Option<u64>,
    pub milestone: Option<u64>,
    pub watchers: Option<u64>,
    pub assigned_to: Option<u64>,
    pub status_is_closed: Option<bool>,
    pub exclude_status: Option<u64>,
    pub exclude_tags: Option<Vec<String>>,
    pub exclude_role: Option<u64>,
    pub exclude_owner: Option<u64>,
    pub exclude_assigned_to: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateTaskParams {
    pub project: u64,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_story: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_blocked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_iocaine: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taskboard_order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub us_order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watchers: Option<Vec<u64>>,
}

/// Partial task update. `version` is the optimistic-concurrency token the
/// service requires on every edit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EditTaskParams {
    pub version: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_story: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_blocked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_iocaine: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watchers: Option<Vec<u64>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FilterCount {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub color: Option<String>,
    pub order: Option<i64>,
    pub count: u64,
}

/// Facet counts for the task list filters of a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TaskFiltersData {
    pub assigned_to: Vec<FilterCount>,
    pub owners: Vec<FilterCount>,
    pub roles: Vec<FilterCount>,
    pub statuses: Vec<FilterCount>,
    pub tags: Vec<FilterCount>,
}
