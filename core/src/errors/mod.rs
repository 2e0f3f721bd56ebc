//! Domain-specific error types and error handling.

mod types;


// Re-export all error types
pub use types::{AuthError, ReviewError, TokenError, UnauthenticatedReason, ValidationError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("Too many requests from this IP, please try again in {} minutes!", retry_after_minutes(*retry_after_seconds))]
    RateLimited { retry_after_seconds: u64 },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    #[error(transparent)]
    Review(#[from] ReviewError),
}

impl DomainError {
    /// Shorthand for wrapping an unexpected failure
    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }

    /// Expected errors carry a message that is safe to show to clients.
    /// Everything else is a bug or an infrastructure fault.
    pub fn is_operational(&self) -> bool {
        !matches!(
            self,
            DomainError::Internal { .. } | DomainError::Token(TokenError::TokenGenerationFailed)
        )
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

/// Whole minutes to wait, rounded up so the client never retries too early
fn retry_after_minutes(seconds: u64) -> u64 {
    seconds.div_ceil(60).max(1)
}
