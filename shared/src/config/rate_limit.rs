//! Request rate limiting configuration

use serde::{Deserialize, Serialize};

use super::env_or;

/// Per-client request budget applied to the `/api` routes
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RateLimitConfig {
    /// Enable rate limiting
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Requests a single client may make per window
    pub max_requests: u32,

    /// Window length in seconds
    pub window_seconds: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            max_requests: 100,
            window_seconds: 3600, // 1 hour
        }
    }
}

impl RateLimitConfig {
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    pub(crate) fn with_env_overrides(self) -> Self {
        Self {
            enabled: env_or("RATE_LIMIT_ENABLED", self.enabled),
            max_requests: env_or("RATE_LIMIT_MAX_REQUESTS", self.max_requests),
            window_seconds: env_or("RATE_LIMIT_WINDOW_SECONDS", self.window_seconds),
        }
    }

    /// Window as a duration
    pub fn window(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.window_seconds)
    }
}

fn default_enabled() -> bool {
    true
}
