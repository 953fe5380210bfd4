//! Asynchronous client for the Taiga project-management REST API.
//!
//! # Overview
//! `TaigaClient` exposes the service's projects, wiki, tasks, users,
//! webhooks, templates, resolver and search endpoints as typed `async`
//! methods. Every method goes through one dispatcher that checks the session,
//! calls the transport and maps failures.
//!
//! # Design
//! - The session (API root, default headers, bearer token) is an immutable
//!   snapshot swapped wholesale on login.
//! - Catalogue methods return `Option<T>` or `bool`; every failure, including
//!   "not logged in", collapses into `None` / `false`. `TaigaClient::execute`
//!   gives the same requests with a typed `ApiError` instead.
//! - Request builders in `resources` are pure and can be inspected without
//!   a network.
//! - The transport is a trait; `ReqwestTransport` is the default.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod resources;
pub mod session;
pub mod transport;
pub mod types;

pub use client::TaigaClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{Access, HttpMethod, HttpRequest, HttpResponse, IntoRequest, QueryValue};
pub use session::Session;
pub use transport::{ReqwestTransport, Transport};
