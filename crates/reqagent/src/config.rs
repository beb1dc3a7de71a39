//! Client transport configuration

use std::time::Duration;

/// Timeout for establishing a TCP connection
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// TCP keep-alive probe interval for pooled connections
pub const DEFAULT_TCP_KEEPALIVE: Duration = Duration::from_secs(30);

/// Timeout for each read while receiving a response
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(10);

/// Deadline for a whole request, connect through last body byte
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Transport timeouts baked into a client at construction.
///
/// There is no per-request override: a client built from a config applies
/// these values for its whole lifetime. The defaults are the named
/// constants in this module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Timeout for establishing a TCP connection
    pub connect_timeout: Duration,
    /// TCP keep-alive probe interval
    pub tcp_keepalive: Duration,
    /// Timeout for each read while receiving a response
    pub read_timeout: Duration,
    /// Deadline for the whole request
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            tcp_keepalive: DEFAULT_TCP_KEEPALIVE,
            read_timeout: DEFAULT_READ_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}
