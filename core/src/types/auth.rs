//! Authentication and registration shapes.

use serde::{Deserialize, Serialize};

use super::user::UserDetail;

/// The user record returned by login and registration, plus the bearer
/// credential for the new session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserAuthDetail {
    pub auth_token: String,
    #[serde(flatten)]
    pub user: UserDetail,
}

/// Open self-service registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublicRegistryParams {
    pub username: String,
    pub password: String,
    pub email: String,
    pub full_name: String,
    pub accepted_terms: bool,
}

/// Registration bound to a project invitation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrivateRegistryParams {
    pub username: String,
    pub password: String,
    pub email: String,
    pub full_name: String,
    pub accepted_terms: bool,
    /// Whether the registrant already has an account.
    pub existing: bool,
    /// Invitation token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Code issued when a user authorizes an external application.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AuthorizationCode {
    pub auth_code: String,
    pub next_url: String,
    pub state: String,
}

/// Application token encrypted with the application's key.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CypheredToken {
    pub token: String,
}
