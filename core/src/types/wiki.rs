use serde::{Deserialize, Serialize};

use super::common::ProjectExtraInfo;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WikiPage {
    pub id: u64,
    pub project: u64,
    pub project_extra_info: ProjectExtraInfo,
    pub slug: String,
    pub content: String,
    pub html: String,
    pub owner: Option<u64>,
    pub last_modifier: Option<u64>,
    pub created_date: String,
    pub modified_date: String,
    pub editions: u64,
    pub version: u64,
    pub is_watcher: bool,
    pub total_watchers: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateWikiPageParams {
    pub project: u64,
    pub slug: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watchers: Option<Vec<u64>>,
}

/// Partial wiki page update; `version` guards against lost updates.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EditWikiPageParams {
    pub version: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watchers: Option<Vec<u64>>,
}

/// Sidebar link to a wiki page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WikiLink {
    pub id: u64,
    pub project: u64,
    pub title: String,
    pub href: String,
    pub order: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateWikiLinkParams {
    pub project: u64,
    pub title: String,
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EditWikiLinkParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}
