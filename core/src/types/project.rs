//! Project shapes: list entries, the full detail record, and the parameter
//! objects for create, edit and the tag/order actions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::common::UserExtraInfo;

/// A project as returned by the list endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Project {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub created_date: String,
    pub modified_date: String,
    pub owner: UserExtraInfo,
    pub members: Vec<u64>,
    pub total_milestones: Option<u64>,
    pub total_story_points: Option<f64>,
    pub is_contact_activated: bool,
    pub is_epics_activated: bool,
    pub is_backlog_activated: bool,
    pub is_kanban_activated: bool,
    pub is_wiki_activated: bool,
    pub is_issues_activated: bool,
    pub videoconferences: Option<String>,
    pub videoconferences_extra_data: Option<String>,
    pub creation_template: Option<u64>,
    pub is_private: bool,
    pub anon_permissions: Vec<String>,
    pub public_permissions: Vec<String>,
    pub is_featured: bool,
    pub is_looking_for_people: bool,
    pub looking_for_people_note: String,
    pub blocked_code: Option<String>,
    pub totals_updated_datetime: String,
    pub total_fans: u64,
    pub total_fans_last_week: u64,
    pub total_fans_last_month: u64,
    pub total_fans_last_year: u64,
    pub total_activity: u64,
    pub total_activity_last_week: u64,
    pub total_activity_last_month: u64,
    pub total_activity_last_year: u64,
    pub tags: Vec<String>,
    pub tags_colors: serde_json::Value,
    pub default_epic_status: Option<u64>,
    pub default_points: Option<u64>,
    pub default_us_status: Option<u64>,
    pub default_task_status: Option<u64>,
    pub default_priority: Option<u64>,
    pub default_severity: Option<u64>,
    pub default_issue_status: Option<u64>,
    pub default_issue_type: Option<u64>,
    pub my_permissions: Vec<String>,
    pub i_am_owner: bool,
    pub i_am_admin: bool,
    pub i_am_member: bool,
    pub notify_level: Option<u8>,
    pub total_closed_milestones: u64,
    pub is_watcher: bool,
    pub total_watchers: u64,
    pub logo_small_url: Option<String>,
    pub logo_big_url: Option<String>,
    pub is_fan: bool,
    pub my_homepage: serde_json::Value,
}

/// A project as returned by get, get-by-slug, create and edit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProjectDetail {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub created_date: String,
    pub modified_date: String,
    pub owner: UserExtraInfo,
    pub members: Vec<ProjectMember>,
    pub total_memberships: u64,
    pub max_memberships: Option<u64>,
    pub total_milestones: Option<u64>,
    pub total_story_points: Option<f64>,
    pub total_closed_milestones: u64,
    pub is_contact_activated: bool,
    pub is_epics_activated: bool,
    pub is_backlog_activated: bool,
    pub is_kanban_activated: bool,
    pub is_wiki_activated: bool,
    pub is_issues_activated: bool,
    pub videoconferences: Option<String>,
    pub videoconferences_extra_data: Option<String>,
    pub creation_template: Option<u64>,
    pub is_private: bool,
    pub is_private_extra_info: PrivateExtraInfo,
    pub is_out_of_owner_limits: bool,
    pub anon_permissions: Vec<String>,
    pub public_permissions: Vec<String>,
    pub my_permissions: Vec<String>,
    pub is_featured: bool,
    pub is_looking_for_people: bool,
    pub looking_for_people_note: String,
    pub blocked_code: Option<String>,
    pub transfer_token: String,
    pub totals_updated_datetime: String,
    pub total_fans: u64,
    pub total_fans_last_week: u64,
    pub total_fans_last_month: u64,
    pub total_fans_last_year: u64,
    pub total_activity: u64,
    pub total_activity_last_week: u64,
    pub total_activity_last_month: u64,
    pub total_activity_last_year: u64,
    pub total_watchers: u64,
    pub tags: Vec<String>,
    pub tags_colors: serde_json::Value,
    pub default_epic_status: Option<u64>,
    pub default_points: Option<u64>,
    pub default_us_status: Option<u64>,
    pub default_task_status: Option<u64>,
    pub default_priority: Option<u64>,
    pub default_severity: Option<u64>,
    pub default_issue_status: Option<u64>,
    pub default_issue_type: Option<u64>,
    pub i_am_owner: bool,
    pub i_am_admin: bool,
    pub i_am_member: bool,
    pub is_fan: bool,
    pub is_watcher: bool,
    pub notify_level: Option<u8>,
    pub my_homepage: serde_json::Value,
    pub logo_small_url: Option<String>,
    pub logo_big_url: Option<String>,
    pub milestones: Vec<ProjectMilestone>,
    pub points: Vec<ProjectPoint>,
    pub priorities: Vec<ProjectAttribute>,
    pub severities: Vec<ProjectAttribute>,
    pub issue_types: Vec<ProjectAttribute>,
    pub roles: Vec<ProjectRole>,
    pub epic_statuses: Vec<ProjectStatus>,
    pub us_statuses: Vec<ProjectStatus>,
    pub task_statuses: Vec<ProjectStatus>,
    pub issue_statuses: Vec<ProjectStatus>,
    pub us_duedates: Vec<ProjectDueDate>,
    pub task_duedates: Vec<ProjectDueDate>,
    pub issue_duedates: Vec<ProjectDueDate>,
    pub epic_custom_attributes: Vec<ProjectCustomAttribute>,
    pub userstory_custom_attributes: Vec<ProjectCustomAttribute>,
    pub task_custom_attributes: Vec<ProjectCustomAttribute>,
    pub issue_custom_attributes: Vec<ProjectCustomAttribute>,
    pub epics_csv_uuid: Option<String>,
    pub userstories_csv_uuid: Option<String>,
    pub tasks_csv_uuid: Option<String>,
    pub issues_csv_uuid: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PrivateExtraInfo {
    pub can_be_updated: bool,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProjectMember {
    pub id: u64,
    pub username: String,
    pub full_name: String,
    pub full_name_display: String,
    pub color: String,
    pub gravatar_id: String,
    pub photo: Option<String>,
    pub is_active: bool,
    pub role: u64,
    pub role_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProjectMilestone {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub closed: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProjectPoint {
    pub id: u64,
    pub name: String,
    pub order: i64,
    pub project_id: u64,
    pub value: Option<f64>,
}

/// Priority, severity or issue type: a named, colored, ordered value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProjectAttribute {
    pub id: u64,
    pub name: String,
    pub color: String,
    pub order: i64,
    pub project_id: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProjectRole {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub order: i64,
    pub computable: bool,
    pub permissions: Vec<String>,
    pub project_id: u64,
}

/// Workflow status of epics, user stories, tasks or issues.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProjectStatus {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub color: String,
    pub order: i64,
    pub is_closed: bool,
    pub is_archived: Option<bool>,
    pub wip_limit: Option<u64>,
    pub project_id: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProjectDueDate {
    pub id: u64,
    pub name: String,
    pub color: String,
    pub order: i64,
    pub by_default: bool,
    pub days_to_due: Option<i64>,
    pub project_id: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProjectCustomAttribute {
    pub id: u64,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub extra: Option<serde_json::Value>,
    pub order: i64,
    pub project_id: u64,
    pub created_date: String,
    pub modified_date: Option<String>,
}

/// Sort keys accepted by the project list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProjectOrderBy {
    #[serde(rename = "memberships__user_order")]
    MembershipsUserOrder,
    TotalFans,
    TotalFansLastWeek,
    TotalFansLastMonth,
    TotalFansLastYear,
    TotalActivity,
    TotalActivityLastWeek,
    TotalActivityLastMonth,
    TotalActivityLastYear,
}

impl ProjectOrderBy {
    pub const ALL: [ProjectOrderBy; 9] = [
        ProjectOrderBy::MembershipsUserOrder,
        ProjectOrderBy::TotalFans,
        ProjectOrderBy::TotalFansLastWeek,
        ProjectOrderBy::TotalFansLastMonth,
        ProjectOrderBy::TotalFansLastYear,
        ProjectOrderBy::TotalActivity,
        ProjectOrderBy::TotalActivityLastWeek,
        ProjectOrderBy::TotalActivityLastMonth,
        ProjectOrderBy::TotalActivityLastYear,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectOrderBy::MembershipsUserOrder => "memberships__user_order",
            ProjectOrderBy::TotalFans => "total_fans",
            ProjectOrderBy::TotalFansLastWeek => "total_fans_last_week",
            ProjectOrderBy::TotalFansLastMonth => "total_fans_last_month",
            ProjectOrderBy::TotalFansLastYear => "total_fans_last_year",
            ProjectOrderBy::TotalActivity => "total_activity",
            ProjectOrderBy::TotalActivityLastWeek => "total_activity_last_week",
            ProjectOrderBy::TotalActivityLastMonth => "total_activity_last_month",
            ProjectOrderBy::TotalActivityLastYear => "total_activity_last_year",
        }
    }
}

/// Filters for the project list. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub member: Option<u64>,
    pub members: Option<Vec<u64>>,
    pub is_looking_for_people: Option<bool>,
    pub is_featured: Option<bool>,
    pub is_backlog_activated: Option<bool>,
    pub is_kanban_activated: Option<bool>,
    pub order_by: Option<ProjectOrderBy>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Videoconference {
    WherebyCom,
    Jitsi,
    Talky,
    Custom,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateProjectParams {
    pub name: String,
    pub description: String,
    pub creation_template: u64,
    pub is_backlog_activated: bool,
    pub is_issues_activated: bool,
    pub is_kanban_activated: bool,
    pub is_private: bool,
    pub is_wiki_activated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub videoconferences: Option<Videoconference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub videoconferences_extra_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_milestones: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_story_points: Option<f64>,
}

/// Partial update of a project; only set fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EditProjectParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_backlog_activated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_issues_activated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_kanban_activated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_wiki_activated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_looking_for_people: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub looking_for_people_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub videoconferences: Option<Videoconference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub videoconferences_extra_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_milestones: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_story_points: Option<f64>,
}

/// One entry of the bulk project reorder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectOrder {
    pub project_id: u64,
    pub order: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ModuleHook {
    pub secret: String,
    pub webhooks_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_origin_ips: Option<Vec<String>>,
}

/// Integration settings for the source-hosting modules.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProjectModules {
    pub bitbucket: Option<ModuleHook>,
    pub github: Option<ModuleHook>,
    pub gitlab: Option<ModuleHook>,
    pub gogs: Option<ModuleHook>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProjectStatsMilestone {
    pub name: String,
    pub optimal: f64,
    pub evolution: Option<f64>,
    pub team_increment: f64,
    pub client_increment: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProjectStats {
    pub name: String,
    pub total_milestones: Option<u64>,
    pub total_points: Option<f64>,
    pub closed_points: f64,
    pub closed_points_per_role: BTreeMap<String, f64>,
    pub defined_points: f64,
    pub defined_points_per_role: BTreeMap<String, f64>,
    pub assigned_points: f64,
    pub assigned_points_per_role: BTreeMap<String, f64>,
    pub milestones: Vec<ProjectStatsMilestone>,
    pub speed: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProjectIssueCount {
    pub id: Option<u64>,
    pub name: String,
    pub username: Option<String>,
    pub color: Option<String>,
    pub count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProjectIssueStats {
    pub total_issues: u64,
    pub opened_issues: u64,
    pub closed_issues: u64,
    pub issues_per_type: BTreeMap<String, ProjectIssueCount>,
    pub issues_per_status: BTreeMap<String, ProjectIssueCount>,
    pub issues_per_priority: BTreeMap<String, ProjectIssueCount>,
    pub issues_per_severity: BTreeMap<String, ProjectIssueCount>,
    pub issues_per_owner: BTreeMap<String, ProjectIssueCount>,
    pub issues_per_assigned_to: BTreeMap<String, ProjectIssueCount>,
    pub last_four_weeks_days: serde_json::Value,
}

/// Tag name to color.
pub type ProjectTagColors = BTreeMap<String, Option<String>>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateTagParams {
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EditTagParams {
    pub from_tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MixTagsParams {
    pub from_tags: Vec<String>,
    pub to_tag: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TemplateFromProjectParams {
    pub template_name: String,
    pub template_description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_by_serializes_like_its_query_value() {
        for order in ProjectOrderBy::ALL {
            let json = serde_json::to_value(order).unwrap();
            assert_eq!(json, order.as_str());
            let back: ProjectOrderBy = serde_json::from_value(json).unwrap();
            assert_eq!(back, order);
        }
    }

    #[test]
    fn videoconference_uses_service_names() {
        assert_eq!(serde_json::to_value(Videoconference::WherebyCom).unwrap(), "whereby-com");
        assert_eq!(serde_json::to_value(Videoconference::Jitsi).unwrap(), "jitsi");
    }

    #[test]
    fn edit_params_send_only_set_fields() {
        let params = EditProjectParams {
            name: Some("Renamed".to_string()),
            ..EditProjectParams::default()
        };
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Renamed"}));
    }

    #[test]
    fn project_detail_tolerates_sparse_payload() {
        let detail: ProjectDetail =
            serde_json::from_str(r#"{"id":42,"slug":"demo","members":[{"id":1,"username":"admin"}]}"#).unwrap();
        assert_eq!(detail.id, 42);
        assert_eq!(detail.slug, "demo");
        assert_eq!(detail.members[0].username, "admin");
        assert!(detail.milestones.is_empty());
    }
}
