//! Client configuration

use crate::{ApiClient, ClientResult};

/// Client configuration for connecting to the booking backend
///
/// # Environment variables
///
/// | Variable | Default | Purpose |
/// |----------|---------|---------|
/// | API_BASE_URL | http://localhost:4000 | Backend base URL |
/// | REQUEST_TIMEOUT_SECS | 30 | Request timeout in seconds |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g., "http://localhost:4000")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
        }
    }

    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:4000".into());
        let timeout = std::env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(30);

        Self { base_url, timeout }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an API client from this configuration
    pub fn build_client(&self) -> ClientResult<ApiClient> {
        ApiClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:4000")
    }
}
