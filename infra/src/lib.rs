//! # Infrastructure Layer
//!
//! Concrete implementations of the ports declared in `tb_core`:
//!
//! - **Database**: MySQL repositories for users, tours and reviews using SQLx,
//!   plus the connection pool and embedded migrations
//! - **Mail**: SMTP delivery through lettre and a tracing-only mailer for
//!   development

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Mail module - outbound email delivery
pub mod mail;

pub use database::{
    DatabasePool, MySqlReviewRepository, MySqlTourRepository, MySqlUserRepository, PoolStatistics,
};
pub use mail::{ConfiguredMailer, LogMailer, SmtpMailer};

use thiserror::Error;

/// Infrastructure-specific error types
#[derive(Debug, Error)]
pub enum InfrastructureError {
    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration errors
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Mail transport errors
    #[error("Mail error: {0}")]
    Mail(String),
}

/// Result type for infrastructure operations
pub type InfrastructureResult<T> = Result<T, InfrastructureError>;
