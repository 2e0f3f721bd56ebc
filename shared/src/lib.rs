//! Shared utilities and common types for the Tourbook server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types, assembled once at startup
//! - The JSON error body returned by every endpoint
//! - Input validation helpers (email, password rules)

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CookieConfig, DatabaseConfig, Environment, JwtConfig, LoggingConfig,
    MailConfig, MailProvider, PasswordConfig, RateLimitConfig, RatingConfig, ServerConfig,
};
pub use errors::{error_codes, ErrorResponse, ErrorStatus};
pub use utils::validation;
