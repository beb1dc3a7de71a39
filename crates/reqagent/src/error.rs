//! HTTP error types

use thiserror::Error;

/// Errors surfaced while constructing or executing a request
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request could not be constructed from the accumulated state
    /// (malformed method token, URL, header name or value)
    #[error("Request construction error: {0}")]
    RequestConstruction(String),
    /// Connection, TLS or timeout failure while executing the request
    #[error("Transport error: {0}")]
    Transport(String),
    /// Body serialization failure recorded by a builder setter
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Client build error
    #[error("Client build error: {0}")]
    Build(String),
}

impl From<reqwest::Error> for HttpError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            HttpError::RequestConstruction(err.to_string())
        } else {
            HttpError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for HttpError {
    fn from(err: serde_json::Error) -> Self {
        HttpError::Serialization(err.to_string())
    }
}
