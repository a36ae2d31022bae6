//! Client configuration

use crate::error::{ClientError, ClientResult};
use crate::http::NetworkHttpClient;

/// Production backend
pub const DEFAULT_BASE_URL: &str = "https://pfebackend-production.up.railway.app/api";

/// Request timeout in seconds when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding the backend base URL
pub const ENV_API_URL: &str = "GERANT_API_URL";

/// Environment variable holding the request timeout in seconds
pub const ENV_TIMEOUT_SECS: &str = "GERANT_TIMEOUT_SECS";

/// Client configuration for connecting to the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:3000/api")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<NetworkHttpClient> {
        NetworkHttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Parse a request timeout; zero or non-numeric input is rejected
pub fn parse_timeout(raw: &str) -> ClientResult<u64> {
    match raw.trim().parse::<u64>() {
        Ok(seconds) if seconds > 0 => Ok(seconds),
        _ => Err(ClientError::Config(format!(
            "timeout must be a positive number of seconds, got {raw:?}"
        ))),
    }
}
