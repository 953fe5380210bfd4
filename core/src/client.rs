//! The Taiga client and its request dispatcher.
//!
//! # Design
//! Every remote operation goes through `TaigaClient::dispatch`, which
//! validates the descriptor, enforces the authentication precondition, takes
//! one session snapshot, calls the transport and maps the status code.
//!
//! Two result shapes sit on top of it:
//! - `execute` / `execute_unit` return `Result<_, ApiError>`;
//! - `value` / `flag` collapse any error into `None` / `false`. The resource
//!   methods in `crate::resources` all use this shape.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{Access, HttpRequest, HttpResponse, IntoRequest};
use crate::session::{Session, SessionState};
use crate::transport::{ReqwestTransport, Transport};

/// Asynchronous client for the Taiga REST API.
///
/// One client owns one session. The session starts anonymous unless the
/// config carries a token and only changes on a successful login.
pub struct TaigaClient {
    session: SessionState,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for TaigaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaigaClient")
            .field("base_url", &self.session.config().base_url)
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl TaigaClient {
    /// Client for `base_url` with default settings and the `reqwest` transport.
    pub fn new(base_url: &str) -> Self {
        Self::with_config(ClientConfig::new(base_url))
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()))
    }

    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            session: SessionState::new(config),
            transport,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        self.session.config()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.snapshot().is_authenticated()
    }

    /// The snapshot the next request will be sent with.
    pub fn session(&self) -> Arc<Session> {
        self.session.snapshot()
    }

    pub(crate) fn authorize(&self, credential: &str) {
        self.session.authorize(credential);
    }

    /// Run a request and decode its body, surfacing the failure cause.
    pub async fn execute<T: DeserializeOwned>(&self, request: impl IntoRequest) -> Result<T, ApiError> {
        let response = self.dispatch(request).await?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    /// Run a request whose payload is irrelevant; any 2xx is success.
    pub async fn execute_unit(&self, request: impl IntoRequest) -> Result<(), ApiError> {
        self.dispatch(request).await.map(|_| ())
    }

    /// `execute`, with every failure collapsed into `None`.
    pub async fn value<T: DeserializeOwned>(&self, request: impl IntoRequest) -> Option<T> {
        self.execute(request).await.map_err(log_failure).ok()
    }

    /// `execute_unit`, with every failure collapsed into `false`.
    pub async fn flag(&self, request: impl IntoRequest) -> bool {
        self.execute_unit(request).await.map_err(log_failure).is_ok()
    }

    async fn dispatch(&self, request: impl IntoRequest) -> Result<HttpResponse, ApiError> {
        let request: HttpRequest = request.into_request()?;
        request.validate()?;

        let session = self.session.snapshot();
        if request.access == Access::Authenticated && !session.is_authenticated() {
            return Err(ApiError::NotAuthenticated);
        }

        debug!(method = %request.method, path = %request.path, "dispatching request");
        let response = self.transport.send(&session, &request).await?;
        check_status(response)
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: HttpResponse) -> Result<HttpResponse, ApiError> {
    if response.is_success() {
        return Ok(response);
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body,
    })
}

fn log_failure(error: ApiError) -> ApiError {
    warn!(%error, "request failed");
    error
}
