//! HTTP client adapter for the admin API.
//!
//! [`Transport`] performs a single exchange and is implemented by
//! [`reqwest_transport::ReqwestTransport`] (browser `fetch` on wasm, hyper
//! natively) and by in-memory doubles in tests. [`ApiClient`] layers the
//! console's request conventions on top of it.

use std::fmt::{Display, Formatter};
use std::future::Future;

use thiserror::Error;

pub mod client;
pub mod csrf;
pub mod reqwest_transport;

pub use client::{ApiClient, ApiError, ApiResult, ApiValue, ErrorBody, RequestBody};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// Mutating verbs must carry the CSRF token.
    pub fn is_mutating(self) -> bool {
        !matches!(self, Method::Get)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Credentials policy of a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Credentials {
    /// Send cookies only to the page's own origin.
    SameOrigin,
}

/// A fully prepared request handed to a [`Transport`].
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
    pub credentials: Credentials,
}

impl ApiRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// What came back from the server, before any interpretation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.to_ascii_lowercase().contains("application/json"))
    }
}

/// No response was obtained (network failure, aborted fetch, bad URL).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("transport error: {0}")]
pub struct TransportError(pub String);

/// Performs one HTTP exchange.
///
/// Futures are not required to be `Send`: the console runs on a single
/// cooperative thread.
pub trait Transport {
    fn send(&self, request: ApiRequest)
    -> impl Future<Output = Result<RawResponse, TransportError>>;
}

impl<T: Transport> Transport for &T {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<RawResponse, TransportError>> {
        (**self).send(request)
    }
}
