//! Slug-to-id resolution results.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectResolve {
    pub project: u64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserStoryResolve {
    pub project: u64,
    pub us: u64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IssueResolve {
    pub project: u64,
    pub issue: u64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskResolve {
    pub project: u64,
    pub task: u64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MilestoneResolve {
    pub project: u64,
    pub milestone: u64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WikiPageResolve {
    pub project: u64,
    pub wikipage: u64,
}

/// Result of resolving a generic `ref`: whichever resource owns it is set.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MultipleResolve {
    pub project: u64,
    pub us: Option<u64>,
    pub task: Option<u64>,
    pub issue: Option<u64>,
    pub epic: Option<u64>,
    pub wikipage: Option<u64>,
}
