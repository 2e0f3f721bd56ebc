//! Database configuration module

use serde::{Deserialize, Serialize};

use super::env_or;

/// Database configuration for MySQL connections
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Connection timeout in seconds
    pub connect_timeout: u64,

    /// Idle connection timeout in seconds
    pub idle_timeout: u64,

    /// Maximum lifetime of a connection in seconds
    pub max_lifetime: u64,

    /// Apply pending migrations when the pool is created
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::from("mysql://localhost:3306/tourbook"),
            max_connections: 10,
            connect_timeout: 30,
            idle_timeout: 600,
            max_lifetime: 1800,
            run_migrations: default_run_migrations(),
        }
    }
}

impl DatabaseConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    pub(crate) fn with_env_overrides(self) -> Self {
        Self {
            url: std::env::var("DATABASE_URL").unwrap_or(self.url),
            max_connections: env_or("DATABASE_MAX_CONNECTIONS", self.max_connections),
            connect_timeout: env_or("DATABASE_CONNECT_TIMEOUT", self.connect_timeout),
            run_migrations: env_or("DATABASE_RUN_MIGRATIONS", self.run_migrations),
            ..self
        }
    }

    /// Create a new database configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the maximum number of connections
    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }
}

fn default_run_migrations() -> bool {
    true
}
