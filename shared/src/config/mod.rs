//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `auth` - Session tokens, cookies and password policy
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `mail` - Outbound mail provider settings
//! - `rate_limit` - Per-client request budget
//! - `rating` - Review rating bounds and aggregate defaults
//! - `server` - HTTP server configuration
//!
//! The whole tree is built once at startup by [`AppConfig::from_env`] and then
//! handed to the services that need a slice of it. Nothing reads the process
//! environment after that point.

pub mod auth;
pub mod database;
pub mod environment;
pub mod mail;
pub mod rate_limit;
pub mod rating;
pub mod server;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::{AuthConfig, CookieConfig, JwtConfig, PasswordConfig};
pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use mail::{MailConfig, MailProvider};
pub use rate_limit::RateLimitConfig;
pub use rating::RatingConfig;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Outbound mail configuration
    pub mail: MailConfig,

    /// Review rating configuration
    #[serde(default)]
    pub rating: RatingConfig,

    /// Request rate limiting
    #[serde(default)]
    pub rate_limit: RateLimitConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            mail: MailConfig::default(),
            rating: RatingConfig::default(),
            rate_limit: RateLimitConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            database: DatabaseConfig::new("mysql://localhost:3306/tourbook_dev"),
            logging: LoggingConfig::for_environment(Environment::Development),
            ..Default::default()
        }
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig::new("0.0.0.0", 8080),
            database: DatabaseConfig::new("mysql://prod-db:3306/tourbook").with_max_connections(50),
            auth: AuthConfig {
                cookie: CookieConfig {
                    force_secure: true,
                    ..Default::default()
                },
                ..Default::default()
            },
            mail: MailConfig {
                provider: MailProvider::Smtp,
                ..Default::default()
            },
            rating: RatingConfig::default(),
            rate_limit: RateLimitConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Production),
        }
    }

    /// Load configuration from environment
    ///
    /// Environment-specific defaults are chosen first, then every section
    /// applies its own variable overrides.
    pub fn from_env() -> Self {
        let env = Environment::from_env();
        let base = match env {
            Environment::Development => Self::development(),
            Environment::Production => Self::production(),
            Environment::Staging => {
                let mut config = Self::development();
                config.environment = Environment::Staging;
                config.logging = LoggingConfig::for_environment(Environment::Staging);
                config
            }
        };

        Self {
            environment: env,
            server: base.server.with_env_overrides(),
            database: base.database.with_env_overrides(),
            auth: base.auth.with_env_overrides(),
            mail: base.mail.with_env_overrides(),
            rating: base.rating.with_env_overrides(),
            rate_limit: base.rate_limit.with_env_overrides(),
            logging: base.logging.with_env_overrides(),
        }
    }
}

/// Parse an environment variable, keeping `current` when it is unset or malformed.
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, current: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(current)
}
