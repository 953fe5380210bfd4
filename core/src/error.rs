//! Error types for the Taiga API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers of the explicit API
//! frequently distinguish "the resource does not exist" from "the server
//! returned an unexpected status." All other non-2xx responses land in
//! `HttpError` with the raw status code and body for debugging.
//!
//! The catalogue methods on `TaigaClient` collapse every variant into `None`
//! or `false`; the variants only surface through `TaigaClient::execute`.

use thiserror::Error;

/// Errors produced while dispatching a request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The operation requires a logged-in session and the client has none.
    /// Raised before any network I/O.
    #[error("operation requires an authenticated session")]
    NotAuthenticated,

    /// The request descriptor is malformed, e.g. a body on a GET.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The transport failed before a response was received.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        ApiError::Transport(error.to_string())
    }
}
