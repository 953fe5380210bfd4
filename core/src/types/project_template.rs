use serde::{Deserialize, Serialize};

/// Names of the template values new projects start with.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TemplateDefaultOptions {
    pub epic_status: String,
    pub issue_status: String,
    pub issue_type: String,
    pub points: String,
    pub priority: String,
    pub severity: String,
    pub task_status: String,
    pub us_status: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TemplateStatus {
    pub name: String,
    pub slug: String,
    pub color: String,
    pub order: i64,
    pub is_closed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wip_limit: Option<u64>,
}

/// Priority, severity or issue type entry of a template.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TemplateAttribute {
    pub name: String,
    pub color: String,
    pub order: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TemplatePoint {
    pub name: String,
    pub order: i64,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TemplateRole {
    pub name: String,
    pub slug: String,
    pub order: i64,
    pub computable: bool,
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProjectTemplate {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub order: i64,
    pub created_date: String,
    pub modified_date: String,
    pub default_owner_role: String,
    pub default_options: TemplateDefaultOptions,
    pub is_backlog_activated: bool,
    pub is_contact_activated: bool,
    pub is_epics_activated: bool,
    pub is_issues_activated: bool,
    pub is_kanban_activated: bool,
    pub is_wiki_activated: bool,
    pub videoconferences: Option<String>,
    pub videoconferences_extra_data: Option<String>,
    pub epic_statuses: Vec<TemplateStatus>,
    pub us_statuses: Vec<TemplateStatus>,
    pub task_statuses: Vec<TemplateStatus>,
    pub issue_statuses: Vec<TemplateStatus>,
    pub issue_types: Vec<TemplateAttribute>,
    pub priorities: Vec<TemplateAttribute>,
    pub severities: Vec<TemplateAttribute>,
    pub points: Vec<TemplatePoint>,
    pub roles: Vec<TemplateRole>,
}

/// Full template body for create and for whole-resource replacement.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectTemplateParams {
    pub name: String,
    pub description: String,
    pub default_owner_role: String,
    pub default_options: TemplateDefaultOptions,
    pub is_backlog_activated: bool,
    pub is_contact_activated: bool,
    pub is_epics_activated: bool,
    pub is_issues_activated: bool,
    pub is_kanban_activated: bool,
    pub is_wiki_activated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub videoconferences: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub videoconferences_extra_data: Option<String>,
    pub epic_statuses: Vec<TemplateStatus>,
    pub us_statuses: Vec<TemplateStatus>,
    pub task_statuses: Vec<TemplateStatus>,
    pub issue_statuses: Vec<TemplateStatus>,
    pub issue_types: Vec<TemplateAttribute>,
    pub priorities: Vec<TemplateAttribute>,
    pub severities: Vec<TemplateAttribute>,
    pub points: Vec<TemplatePoint>,
    pub roles: Vec<TemplateRole>,
}
