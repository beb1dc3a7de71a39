//! Fluent HTTP request builder and client.
//!
//! A thin client over a preconfigured reqwest transport paired with a
//! value-type request builder: accumulate method, URL, headers, body,
//! query/form data, then `send`. Only a 200 response has its body read into
//! memory; any other status is handed back untouched with no body and no
//! error, leaving status handling to the caller. Form and query data pass
//! through a coercion step ([`to_url_values`]) flattening a closed set of
//! value kinds into URL-encoded strings.
//!
//! # Example
//!
//! ```no_run
//! use reqagent::HttpClient;
//!
//! async fn example() -> Result<(), reqagent::HttpError> {
//!     let client = HttpClient::new();
//!     let (head, body) = client.get("https://api.example.com/data", None).await?;
//!     if head.status() == 200 {
//!         println!("{} bytes", body.map(|b| b.len()).unwrap_or(0));
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod request;
mod response;
mod values;

pub use client::HttpClient;
pub use config::{
    ClientConfig, DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT, DEFAULT_REQUEST_TIMEOUT,
    DEFAULT_TCP_KEEPALIVE,
};
pub use error::HttpError;
pub use request::{RequestBuilder, TargetType};
pub use response::{ApiEnvelope, Response, ResponseHead};
pub use values::{to_url_values, FormValue, SeqValue};
