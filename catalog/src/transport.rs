//! HTTP transport seam under [`crate::ApiClient`].
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build sends through `gloo-net` with credentials included; the
//! CLI sends through `reqwest` with a cookie jar. Both only have to move an
//! [`ApiRequest`] to the server and hand back status + body text. Error-shape
//! normalization happens above this layer.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;

/// HTTP verbs the catalog API uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A request relative to the API base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path beginning with `/`, e.g. `/book/7/`.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), body: None }
    }

    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    #[must_use]
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    #[must_use]
    pub fn with_query(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query = pairs;
        self
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if the body cannot be serialized.
    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }
}

/// Raw response: status plus undecoded body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failures below the HTTP status level.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request could not be sent or no response arrived.
    #[error("request failed: {0}")]
    Request(String),
    /// A response arrived but its body could not be read.
    #[error("response body unreadable: {0}")]
    Body(String),
    /// The transport could not be constructed or is not usable here.
    #[error("transport unavailable: {0}")]
    Unavailable(String),
}

/// Sends one request and returns the raw response.
///
/// `?Send` because browser futures hold JS values that cannot cross threads.
#[async_trait::async_trait(?Send)]
pub trait Transport {
    /// Send `request` and return whatever status the server answered.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] only when no usable response was received;
    /// non-2xx statuses are successes at this layer.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// Join the API base URL and a request path without doubling slashes.
#[must_use]
pub fn request_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if path.starts_with('/') { format!("{base}{path}") } else { format!("{base}/{path}") }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub(crate) mod test_helpers {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;

    /// Scripted transport: replies are consumed in order and every request is
    /// recorded for inspection.
    #[derive(Debug, Default)]
    pub struct FakeTransport {
        replies: RefCell<VecDeque<Result<ApiResponse, TransportError>>>,
        requests: RefCell<Vec<ApiRequest>>,
    }

    impl FakeTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn reply(self, status: u16, body: Value) -> Self {
            self.replies.borrow_mut().push_back(Ok(ApiResponse { status, body: body.to_string() }));
            self
        }

        pub fn reply_raw(self, status: u16, body: &str) -> Self {
            self.replies.borrow_mut().push_back(Ok(ApiResponse { status, body: body.to_owned() }));
            self
        }

        pub fn unreachable(self) -> Self {
            self.replies
                .borrow_mut()
                .push_back(Err(TransportError::Request("connection refused".to_owned())));
            self
        }

        pub fn requests(&self) -> Vec<ApiRequest> {
            self.requests.borrow().clone()
        }

        pub fn paths(&self) -> Vec<String> {
            self.requests.borrow().iter().map(|r| format!("{} {}", r.method.as_str(), r.path)).collect()
        }
    }

    #[async_trait::async_trait(?Send)]
    impl Transport for FakeTransport {
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
            self.requests.borrow_mut().push(request);
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(TransportError::Request("no scripted reply".to_owned())))
        }
    }
}
