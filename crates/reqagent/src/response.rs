//! HTTP response types

use reqwest::header::HeaderMap;
use serde::Deserialize;

use crate::error::HttpError;

/// Result type for all HTTP operations
pub type Response<T, E = HttpError> = Result<T, E>;

/// Status code and headers of a completed exchange, without the body.
///
/// A non-200 exchange returns only this: whether a 404 is worth an error is
/// the caller's call, not the client's.
#[derive(Debug, Clone)]
pub struct ResponseHead {
    status: u16,
    headers: HeaderMap,
}

impl ResponseHead {
    pub(crate) fn new(status: u16, headers: HeaderMap) -> Self {
        Self { status, headers }
    }

    /// Get the HTTP status code
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Response headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Check if the response status is a success (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Check if the response status is a client error (4xx)
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    /// Check if the response status is a server error (5xx)
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }
}

/// `{code, message, data}` envelope returned by the APIs this client was
/// written against
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Application-level status code
    pub code: i32,
    /// Human-readable status message
    pub message: String,
    /// Payload, absent on failures
    pub data: Option<T>,
}
