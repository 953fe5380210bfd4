//! Login and registration.
//!
//! # Design
//! Logins are the only operations that change the session: the credential
//! from a successful response is installed with `TaigaClient::authorize`
//! before the DTO is handed back. A failed login returns `None` and leaves
//! the session exactly as it was, authenticated or not. A 2xx reply with a
//! blank `auth_token` counts as a failed login. Registration returns
//! the new user but never logs in.

use serde::Serialize;
use tracing::warn;

use crate::client::TaigaClient;
use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::types::{PrivateRegistryParams, PublicRegistryParams, UserAuthDetail};

#[derive(Serialize)]
struct CredentialsLogin<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct CodeLogin<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    code: &'a str,
}

#[derive(Serialize)]
struct Registration<'a, P> {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(flatten)]
    params: &'a P,
}

/// `username` also accepts the account's email.
pub fn normal_login(username: &str, password: &str) -> Result<HttpRequest, ApiError> {
    HttpRequest::post("/auth").json(&CredentialsLogin {
        kind: "normal",
        username,
        password,
    })
}

/// Exchange a third-party authorization code, e.g. `provider = "github"`.
pub fn code_login(provider: &str, code: &str) -> Result<HttpRequest, ApiError> {
    HttpRequest::post("/auth").json(&CodeLogin { kind: provider, code })
}

pub fn public_registry(params: &PublicRegistryParams) -> Result<HttpRequest, ApiError> {
    HttpRequest::post("/auth/register").json(&Registration { kind: "public", params })
}

pub fn private_registry(params: &PrivateRegistryParams) -> Result<HttpRequest, ApiError> {
    HttpRequest::post("/auth/register").json(&Registration { kind: "private", params })
}

impl TaigaClient {
    /// Log in with username (or email) and password.
    pub async fn normal_login(&self, username: &str, password: &str) -> Option<UserAuthDetail> {
        self.login(normal_login(username, password)).await
    }

    /// Log in with a GitHub authorization code.
    pub async fn github_login(&self, code: &str) -> Option<UserAuthDetail> {
        self.code_login("github", code).await
    }

    /// Log in with an authorization code from any configured provider.
    pub async fn code_login(&self, provider: &str, code: &str) -> Option<UserAuthDetail> {
        self.login(code_login(provider, code)).await
    }

    /// Self-service registration. Does not log in.
    pub async fn public_registry(&self, params: &PublicRegistryParams) -> Option<UserAuthDetail> {
        self.value(public_registry(params)).await
    }

    /// Invitation-bound registration. Does not log in.
    pub async fn private_registry(&self, params: &PrivateRegistryParams) -> Option<UserAuthDetail> {
        self.value(private_registry(params)).await
    }

    async fn login(&self, request: Result<HttpRequest, ApiError>) -> Option<UserAuthDetail> {
        let detail: UserAuthDetail = self.value(request).await?;
        if detail.auth_token.trim().is_empty() {
            warn!(user = detail.user.id, "login response carried no auth token");
            return None;
        }
        self.authorize(&detail.auth_token);
        Some(detail)
    }
}
