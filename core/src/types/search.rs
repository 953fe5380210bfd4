use serde::{Deserialize, Serialize};

/// An epic, issue or task hit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SearchItem {
    pub id: u64,
    #[serde(rename = "ref")]
    pub reference: u64,
    pub subject: String,
    pub status: Option<u64>,
    pub assigned_to: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchUserStory {
    pub id: u64,
    #[serde(rename = "ref")]
    pub reference: u64,
    pub subject: String,
    pub status: Option<u64>,
    pub milestone_name: Option<String>,
    pub milestone_slug: Option<String>,
    pub total_points: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SearchWikiPage {
    pub id: u64,
    pub slug: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchResults {
    pub count: u64,
    pub epics: Vec<SearchItem>,
    pub issues: Vec<SearchItem>,
    pub tasks: Vec<SearchItem>,
    pub userstories: Vec<SearchUserStory>,
    pub wikipages: Vec<SearchWikiPage>,
}
