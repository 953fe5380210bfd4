//! Webhooks and their delivery logs. All of it is admin-only.

use crate::client::TaigaClient;
use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::types::{CreateWebhookParams, EditWebhookParams, Webhook, WebhookLog};

pub fn list(project: Option<u64>) -> HttpRequest {
    HttpRequest::get("/webhooks")
        .authenticated()
        .query_opt("project", project.as_ref())
}

pub fn create(params: &CreateWebhookParams) -> Result<HttpRequest, ApiError> {
    HttpRequest::post("/webhooks").authenticated().json(params)
}

pub fn get(id: u64) -> HttpRequest {
    HttpRequest::get(format!("/webhooks/{id}")).authenticated()
}

pub fn edit(id: u64, params: &EditWebhookParams) -> Result<HttpRequest, ApiError> {
    HttpRequest::patch(format!("/webhooks/{id}")).authenticated().json(params)
}

pub fn delete(id: u64) -> HttpRequest {
    HttpRequest::delete(format!("/webhooks/{id}")).authenticated()
}

pub fn test(id: u64) -> HttpRequest {
    HttpRequest::post(format!("/webhooks/{id}/test")).authenticated()
}

pub fn list_logs(webhook: Option<u64>) -> HttpRequest {
    HttpRequest::get("/webhooklogs")
        .authenticated()
        .query_opt("webhook", webhook.as_ref())
}

pub fn get_log(id: u64) -> HttpRequest {
    HttpRequest::get(format!("/webhooklogs/{id}")).authenticated()
}

pub fn resend_log(id: u64) -> HttpRequest {
    HttpRequest::post(format!("/webhooklogs/{id}/resend")).authenticated()
}

impl TaigaClient {
    pub async fn list_webhooks(&self, project: Option<u64>) -> Option<Vec<Webhook>> {
        self.value(list(project)).await
    }

    pub async fn create_webhook(&self, params: &CreateWebhookParams) -> Option<Webhook> {
        self.value(create(params)).await
    }

    pub async fn get_webhook(&self, id: u64) -> Option<Webhook> {
        self.value(get(id)).await
    }

    pub async fn edit_webhook(&self, id: u64, params: &EditWebhookParams) -> Option<Webhook> {
        self.value(edit(id, params)).await
    }

    pub async fn delete_webhook(&self, id: u64) -> bool {
        self.flag(delete(id)).await
    }

    /// Fire a test delivery and return its log entry.
    pub async fn test_webhook(&self, id: u64) -> Option<WebhookLog> {
        self.value(test(id)).await
    }

    pub async fn list_webhook_logs(&self, webhook: Option<u64>) -> Option<Vec<WebhookLog>> {
        self.value(list_logs(webhook)).await
    }

    pub async fn get_webhook_log(&self, id: u64) -> Option<WebhookLog> {
        self.value(get_log(id)).await
    }

    pub async fn resend_webhook_log(&self, id: u64) -> Option<WebhookLog> {
        self.value(resend_log(id)).await
    }
}
