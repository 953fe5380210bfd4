//! HTTP request descriptors and transport-facing response data.
//!
//! # Design
//! An `HttpRequest` describes one remote call as plain data: method, path
//! relative to the API root, query parameters, optional JSON body, and
//! whether the call needs an authenticated session. Resource modules build
//! these values without touching the network; `TaigaClient` binds them to the
//! current session and hands them to a `Transport`.
//!
//! Query values are kept flat. Arrays are rendered comma-joined so the wire
//! shape never nests.

use serde::Serialize;
use strum::{Display, IntoStaticStr};

use crate::error::ApiError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// GET and DELETE requests never carry a body.
    pub fn allows_body(self) -> bool {
        !matches!(self, HttpMethod::Get | HttpMethod::Delete)
    }
}

/// Whether a request may be sent on an anonymous session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
}

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Scalar(String),
    List(Vec<String>),
}

impl QueryValue {
    /// Render the value as it appears on the wire.
    pub fn render(&self) -> String {
        match self {
            QueryValue::Scalar(value) => value.clone(),
            QueryValue::List(values) => values.join(","),
        }
    }
}

/// Conversion into a flat query value. Implemented for the scalar types the
/// service filters on and for slices of them.
pub trait ToQueryValue {
    fn to_query_value(&self) -> QueryValue;
}

macro_rules! scalar_query_value {
    ($($ty:ty),*) => {
        $(
            impl ToQueryValue for $ty {
                fn to_query_value(&self) -> QueryValue {
                    QueryValue::Scalar(self.to_string())
                }
            }
        )*
    };
}

scalar_query_value!(u32, u64, i64, bool, str, String);

impl<T: ToQueryValue + ?Sized> ToQueryValue for &T {
    fn to_query_value(&self) -> QueryValue {
        (**self).to_query_value()
    }
}

impl<T: ToQueryValue> ToQueryValue for [T] {
    fn to_query_value(&self) -> QueryValue {
        QueryValue::List(self.iter().map(|v| v.to_query_value().render()).collect())
    }
}

impl<T: ToQueryValue> ToQueryValue for Vec<T> {
    fn to_query_value(&self) -> QueryValue {
        self.as_slice().to_query_value()
    }
}

/// An HTTP request described as plain data.
///
/// Built by the resource modules (`crate::resources`). Executed by
/// `TaigaClient`, which prefixes `path` with the session's API root and
/// attaches the session's default headers.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, QueryValue)>,
    pub body: Option<serde_json::Value>,
    pub access: Access,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            access: Access::Public,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Patch, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Mark the request as requiring an authenticated session.
    pub fn authenticated(mut self) -> Self {
        self.access = Access::Authenticated;
        self
    }

    pub fn query<V: ToQueryValue + ?Sized>(mut self, name: &str, value: &V) -> Self {
        self.query.push((name.to_string(), value.to_query_value()));
        self
    }

    /// Append a query parameter only when a value is present.
    pub fn query_opt<V: ToQueryValue>(self, name: &str, value: Option<&V>) -> Self {
        match value {
            Some(value) => self.query(name, value),
            None => self,
        }
    }

    /// Attach a JSON body serialized from `payload`.
    pub fn json<T: Serialize + ?Sized>(mut self, payload: &T) -> Result<Self, ApiError> {
        let body = serde_json::to_value(payload)
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        self.body = Some(body);
        Ok(self)
    }

    /// Query parameters rendered as `(name, value)` string pairs.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.query
            .iter()
            .map(|(name, value)| (name.clone(), value.render()))
            .collect()
    }

    /// Check the descriptor's own invariants before it is dispatched.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.body.is_some() && !self.method.allows_body() {
            return Err(ApiError::InvalidRequest(format!(
                "{} {} must not carry a body",
                self.method, self.path
            )));
        }
        Ok(())
    }
}

/// Anything the dispatcher can turn into a request. Lets resource methods
/// pass both infallible descriptors and those that serialized a body.
pub trait IntoRequest {
    fn into_request(self) -> Result<HttpRequest, ApiError>;
}

impl IntoRequest for HttpRequest {
    fn into_request(self) -> Result<HttpRequest, ApiError> {
        Ok(self)
    }
}

impl IntoRequest for Result<HttpRequest, ApiError> {
    fn into_request(self) -> Result<HttpRequest, ApiError> {
        self
    }
}

/// An HTTP response described as plain data.
///
/// Produced by a `Transport` for any status code; interpreting the status is
/// the dispatcher's job.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
