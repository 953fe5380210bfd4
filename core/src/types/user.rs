use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Public profile of a user, as listed by `/users`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UserContact {
    pub id: u64,
    pub username: String,
    pub full_name: String,
    pub full_name_display: String,
    pub color: String,
    pub bio: String,
    pub lang: String,
    pub theme: String,
    pub timezone: String,
    pub is_active: bool,
    pub photo: Option<String>,
    pub big_photo: Option<String>,
    pub gravatar_id: String,
    pub roles: Vec<String>,
}

/// Full user record, returned for the current user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UserDetail {
    pub id: u64,
    pub username: String,
    pub full_name: String,
    pub full_name_display: String,
    pub email: String,
    pub uuid: Uuid,
    pub color: String,
    pub bio: String,
    pub lang: String,
    pub theme: String,
    pub timezone: String,
    pub is_active: bool,
    pub photo: Option<String>,
    pub big_photo: Option<String>,
    pub gravatar_id: String,
    pub roles: Vec<String>,
    pub date_joined: String,
    pub accepted_terms: bool,
    pub read_new_terms: bool,
    pub verified_email: bool,
    pub total_private_projects: u64,
    pub total_public_projects: u64,
    pub max_private_projects: Option<u64>,
    pub max_public_projects: Option<u64>,
    pub max_memberships_private_projects: Option<u64>,
    pub max_memberships_public_projects: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UserStats {
    pub roles: Vec<String>,
    pub total_num_closed_userstories: u64,
    pub total_num_contacts: u64,
    pub total_num_projects: u64,
}

/// Partial update of a user; only set fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EditUserParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangePasswordParams {
    pub current_password: String,
    pub password: String,
}
