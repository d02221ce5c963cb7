//! Browser transport for the catalog API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net` with
//! `credentials: include`, so the session cookies set by the login response
//! ride along on every request.
//! Native builds (unit tests): every send fails with
//! [`TransportError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! Only "no usable response" is an error here. Any HTTP status, including
//! 4xx/5xx, is handed up as an [`ApiResponse`] for the API client to
//! normalize.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use catalog::transport::{ApiRequest, ApiResponse, Transport, TransportError};

/// API root baked in at build time (`SHELFMARK_API_BASE`), defaulting to the
/// same-origin `/api` prefix.
pub const API_BASE: &str = match option_env!("SHELFMARK_API_BASE") {
    Some(base) => base,
    None => "/api",
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserTransport {
    base_url: String,
}

impl Default for BrowserTransport {
    fn default() -> Self {
        Self::new(API_BASE)
    }
}

impl BrowserTransport {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned() }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for `request`, without the query string.
    fn url_for(&self, request: &ApiRequest) -> String {
        catalog::transport::request_url(&self.base_url, &request.path)
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = self.url_for(&request);
        #[cfg(feature = "csr")]
        {
            use catalog::transport::Method;
            use gloo_net::http::Request;

            let builder = match request.method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Put => Request::put(&url),
                Method::Delete => Request::delete(&url),
            }
            .credentials(web_sys::RequestCredentials::Include)
            .query(request.query.iter().map(|(key, value)| (key.as_str(), value.as_str())));

            let sent = match &request.body {
                Some(body) => builder
                    .json(body)
                    .map_err(|e| TransportError::Request(e.to_string()))?
                    .send()
                    .await,
                None => builder.send().await,
            };
            let response = sent.map_err(|e| TransportError::Request(e.to_string()))?;
            let status = response.status();
            let body = response.text().await.map_err(|e| TransportError::Body(e.to_string()))?;
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(TransportError::Unavailable(format!("{url}: browser transport requires the csr feature")))
        }
    }
}
