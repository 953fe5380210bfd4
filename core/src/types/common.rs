//! Small shapes embedded in several resources.

use serde::{Deserialize, Serialize};

/// Minimal project reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProjectBriefInfo {
    pub id: u64,
    pub name: String,
    pub slug: String,
}

/// Project reference attached to tasks and wiki pages.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProjectExtraInfo {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub logo_small_url: Option<String>,
}

/// User reference attached to projects and tasks.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UserExtraInfo {
    pub id: u64,
    pub username: String,
    pub full_name_display: String,
    pub photo: Option<String>,
    pub big_photo: Option<String>,
    pub gravatar_id: String,
    pub is_active: bool,
}

/// A user who voted for, liked or watches a resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Voter {
    pub id: u64,
    pub username: String,
    pub full_name: String,
}

/// Watchers have the same shape as voters.
pub type Watcher = Voter;

/// Body of the watch action on resources that accept a notify level.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WatchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_level: Option<u8>,
}
