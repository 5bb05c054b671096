use std::{env, time::Duration};

/// Default server URL when `HUXLEY_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (default: "http://localhost:8000")
    pub base_url: String,
    /// Per-request timeout in seconds (default: 30)
    pub request_timeout_seconds: u64,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `HUXLEY_URL` - Server base URL (default: "http://localhost:8000")
    /// - `HUXLEY_TIMEOUT_SECS` - Request timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("HUXLEY_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            request_timeout_seconds: env::var("HUXLEY_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }

    /// Overrides the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the per-request timeout.
    pub fn with_request_timeout_seconds(mut self, seconds: u64) -> Self {
        self.request_timeout_seconds = seconds;
        self
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}
