//! Server configuration module

use serde::{Deserialize, Serialize};

use super::env_or;

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,

    /// Maximum JSON payload size in bytes
    #[serde(default = "default_max_payload_size")]
    pub max_payload_size: usize,

    /// Externally visible origin used to build links in outbound mail
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 3000,
            workers: 0,
            max_payload_size: default_max_payload_size(),
            public_base_url: default_public_base_url(),
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    pub(crate) fn with_env_overrides(self) -> Self {
        Self {
            host: std::env::var("SERVER_HOST").unwrap_or(self.host),
            port: env_or("PORT", self.port),
            workers: env_or("SERVER_WORKERS", self.workers),
            max_payload_size: env_or("SERVER_MAX_PAYLOAD_SIZE", self.max_payload_size),
            public_base_url: std::env::var("PUBLIC_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(self.public_base_url),
        }
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_max_payload_size() -> usize {
    10 * 1024 // 10 KiB
}

fn default_public_base_url() -> String {
    String::from("http://127.0.0.1:3000")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.max_payload_size, 10240);
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
    }

    #[test]
    fn test_server_config_new() {
        let config = ServerConfig::new("0.0.0.0", 8080);
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.workers, 0);
    }
}
