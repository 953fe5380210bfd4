//! The transport seam and its `reqwest` implementation.
//!
//! A `Transport` executes one request against the session's API root with
//! the session's default headers. It returns every HTTP status as data and
//! only errors when no response was received; status interpretation happens
//! in the dispatcher.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::session::Session;

#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, session: &Session, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// `Transport` backed by a shared `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured client, e.g. one with timeouts or a proxy.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    fn build(&self, session: &Session, request: &HttpRequest) -> RequestBuilder {
        let mut builder = self
            .client
            .request(Self::to_reqwest_method(request.method), session.url(&request.path));

        for (name, value) in session.headers() {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if !request.query.is_empty() {
            builder = builder.query(&request.query_pairs());
        }
        // Session headers go first so `json` keeps the charset Content-Type.
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        builder
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, session: &Session, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let builder = self.build(session, request);
        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("<binary>").to_string()))
            .collect();
        let body = response.text().await?;

        Ok(HttpResponse { status, headers, body })
    }
}
