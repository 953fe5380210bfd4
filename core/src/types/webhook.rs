use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Webhook {
    pub id: u64,
    pub project: u64,
    pub name: String,
    pub url: String,
    pub key: String,
    pub logs_counter: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateWebhookParams {
    pub project: u64,
    pub name: String,
    pub url: String,
    /// Secret used to sign deliveries.
    pub key: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EditWebhookParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WebhookAuthor {
    pub id: u64,
    pub username: String,
    pub full_name: String,
    pub gravatar_id: String,
    pub permalink: String,
    pub photo: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WebhookPayload {
    pub action: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub by: WebhookAuthor,
    pub date: String,
    pub data: serde_json::Value,
}

/// One delivery attempt of a webhook.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WebhookLog {
    pub id: u64,
    pub webhook: u64,
    pub url: String,
    pub status: u16,
    pub created: String,
    pub duration: f64,
    pub request_data: WebhookPayload,
    pub request_headers: BTreeMap<String, String>,
    pub response_data: String,
    pub response_headers: BTreeMap<String, String>,
}
