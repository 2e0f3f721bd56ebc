//! Shared error types and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Top-level status of a failed request
///
/// `Fail` marks a client-side problem (4xx), `Error` a server-side one (5xx).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorStatus {
    Fail,
    Error,
}

impl ErrorStatus {
    /// Derive the status from an HTTP status code
    pub fn from_http_status(code: u16) -> Self {
        if code >= 500 {
            ErrorStatus::Error
        } else {
            ErrorStatus::Fail
        }
    }
}

/// Standard error response structure used across all API endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: ErrorStatus,

    /// Error code for client identification
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(status: ErrorStatus, error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            error: error.into(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Common error codes used across the application
pub mod error_codes {
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const FORBIDDEN: &str = "FORBIDDEN";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
    pub const CONFLICT: &str = "CONFLICT";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const TOKEN_EXPIRED: &str = "TOKEN_EXPIRED";
    pub const TOKEN_INVALID: &str = "TOKEN_INVALID";
    pub const INVALID_CREDENTIALS: &str = "INVALID_CREDENTIALS";
    pub const RESET_TOKEN_INVALID: &str = "RESET_TOKEN_INVALID";
    pub const EMAIL_DELIVERY_FAILED: &str = "EMAIL_DELIVERY_FAILED";
    pub const RATE_LIMIT_EXCEEDED: &str = "RATE_LIMIT_EXCEEDED";
    pub const DATABASE_ERROR: &str = "DATABASE_ERROR";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_http_code() {
        assert_eq!(ErrorStatus::from_http_status(404), ErrorStatus::Fail);
        assert_eq!(ErrorStatus::from_http_status(500), ErrorStatus::Error);
    }

    #[test]
    fn test_serialized_shape() {
        let body = ErrorResponse::new(ErrorStatus::Fail, error_codes::NOT_FOUND, "No review found with that ID");
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["status"], "fail");
        assert_eq!(json["error"], "NOT_FOUND");
        assert_eq!(json["message"], "No review found with that ID");
        assert!(json["timestamp"].is_string());
    }
}
