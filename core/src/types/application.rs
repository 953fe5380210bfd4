use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An external application registered with the service.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Application {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub icon_url: Option<String>,
    pub web: String,
}

/// A user's grant to an application.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ApplicationToken {
    pub id: u64,
    pub user: u64,
    pub application: Application,
    pub auth_code: Option<String>,
    pub next_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthorizeApplicationParams {
    pub application: Uuid,
    pub state: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidateApplicationParams {
    pub application: Uuid,
    pub auth_code: String,
    pub state: String,
}
