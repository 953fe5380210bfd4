//! Session state: who the client talks to, and as whom.
//!
//! # Design
//! A `Session` is an immutable snapshot of the API root and the default
//! header set. The bearer credential and the `Authorization` header are
//! derived together in `Session::new`, so a snapshot is authenticated exactly
//! when its headers carry a bearer token.
//!
//! `SessionState` holds the current snapshot in a single `RwLock` slot.
//! `authorize` builds a fresh snapshot and swaps it in; readers clone the
//! `Arc` and keep using it for the whole request, so an in-flight request
//! never sees a header change.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::info;

use crate::config::ClientConfig;

pub const API_PREFIX: &str = "/api/v1";
pub const CONTENT_TYPE: &str = "application/json;charset=utf-8";
pub const DISABLE_PAGINATION_HEADER: &str = "x-disable-pagination";

/// Immutable view of the connection settings used for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    api_root: String,
    headers: Vec<(String, String)>,
    credential: Option<String>,
}

impl Session {
    pub fn new(config: &ClientConfig, credential: Option<String>) -> Self {
        let mut headers = vec![
            ("Content-Type".to_string(), CONTENT_TYPE.to_string()),
            (
                DISABLE_PAGINATION_HEADER.to_string(),
                if config.disable_pagination { "True" } else { "False" }.to_string(),
            ),
            ("Accept-Language".to_string(), config.language.clone()),
        ];
        if let Some(token) = &credential {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }
        Self {
            api_root: format!("{}{API_PREFIX}", config.base_url.trim_end_matches('/')),
            headers,
            credential,
        }
    }

    /// Base URL plus `/api/v1`, without a trailing slash.
    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }

    /// Absolute URL for a path relative to the API root.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_root)
    }
}

/// The single mutable slot holding the current `Session`.
#[derive(Debug)]
pub(crate) struct SessionState {
    config: ClientConfig,
    current: RwLock<Arc<Session>>,
}

impl SessionState {
    pub(crate) fn new(config: ClientConfig) -> Self {
        let session = Session::new(&config, config.token.clone());
        Self {
            config,
            current: RwLock::new(Arc::new(session)),
        }
    }

    pub(crate) fn snapshot(&self) -> Arc<Session> {
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Replace the session with one carrying `credential`.
    pub(crate) fn authorize(&self, credential: &str) {
        let session = Arc::new(Session::new(&self.config, Some(credential.to_string())));
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = session;
        info!(api_root = %self.config.base_url, "session authorized");
    }

    pub(crate) fn config(&self) -> &ClientConfig {
        &self.config
    }
}
