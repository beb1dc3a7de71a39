//! HTTP client wrapper

use crate::config::ClientConfig;
use crate::error::HttpError;
use crate::request::RequestBuilder;
use crate::response::{Response, ResponseHead};

/// HTTP client wrapper around a preconfigured reqwest transport.
///
/// Timeouts are fixed at construction via [`ClientConfig`]; there is no
/// per-request override. Cloning is cheap and shares the underlying
/// connection pool.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient {
    /// Create a client with the default transport timeouts.
    ///
    /// # Panics
    ///
    /// Panics if the TLS backend cannot be initialized, matching the
    /// contract of `reqwest::Client::new`.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default()).expect("default client config builds")
    }

    /// Create a client with explicit transport timeouts
    pub fn with_config(config: ClientConfig) -> Response<Self> {
        let inner = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .tcp_keepalive(config.tcp_keepalive)
            .read_timeout(config.read_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| HttpError::Build(e.to_string()))?;
        Ok(Self { inner })
    }

    pub(crate) fn inner(&self) -> &reqwest::Client {
        &self.inner
    }

    /// Start a request builder; `method` may be any token `send` can parse
    pub fn request(&self, method: impl Into<String>, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(self.clone(), method, url)
    }

    /// GET `url` and return the response head and, on a 200, the body.
    ///
    /// The second argument exists for call-site symmetry with
    /// [`HttpClient::post`] and is never read.
    pub async fn get(
        &self,
        url: &str,
        _body: Option<&[u8]>,
    ) -> Response<(ResponseHead, Option<Vec<u8>>)> {
        self.request("GET", url).send().await
    }

    /// POST a pre-serialized JSON string to `url`.
    ///
    /// Sends the single header `Content-Type: application/json` and the raw
    /// bytes of `body`; there is no serialization step.
    pub async fn post(
        &self,
        url: &str,
        body: &str,
    ) -> Response<(ResponseHead, Option<Vec<u8>>)> {
        self.request("POST", url)
            .header("Content-Type", "application/json")
            .body(body.as_bytes().to_vec())
            .send()
            .await
    }
}
