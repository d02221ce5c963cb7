//! Native HTTP transport over `reqwest` with a cookie jar.
//!
//! The jar plays the role the browser's cookie store plays for the web
//! client: the login response sets the session cookies and every later
//! request carries them. `cookie_header` and `with_cookie` let the CLI
//! persist that credential between invocations.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;
use reqwest::cookie::{CookieStore, Jar};

use crate::config::ClientConfig;
use crate::transport::{ApiRequest, ApiResponse, Method, Transport, TransportError, request_url};

#[derive(Clone, Debug)]
pub struct HttpTransport {
    http: reqwest::Client,
    jar: Arc<Jar>,
    base_url: String,
    origin: Url,
}

impl HttpTransport {
    /// Build a client with the configured timeouts and an empty jar.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Unavailable`] if the base URL does not parse
    /// or the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let origin = Url::parse(&config.base_url).map_err(|e| TransportError::Unavailable(e.to_string()))?;
        let jar = Arc::new(Jar::default());
        let http = reqwest::Client::builder()
            .cookie_provider(Arc::clone(&jar))
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| TransportError::Unavailable(e.to_string()))?;
        Ok(Self { http, jar, base_url: config.base_url.clone(), origin })
    }

    /// Seed the jar from a `Cookie` header value (`a=1; b=2`).
    #[must_use]
    pub fn with_cookie(self, header: &str) -> Self {
        for pair in header.split(';').map(str::trim).filter(|pair| pair.contains('=')) {
            self.jar.add_cookie_str(&format!("{pair}; Path=/"), &self.origin);
        }
        self
    }

    /// The `Cookie` header the next request would send, if any.
    #[must_use]
    pub fn cookie_header(&self) -> Option<String> {
        self.jar
            .cookies(&self.origin)
            .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = request_url(&self.base_url, &request.path);
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.http.request(method, &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| TransportError::Request(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| TransportError::Body(e.to_string()))?;
        tracing::trace!(%url, status, "response received");
        Ok(ApiResponse { status, body })
    }
}
