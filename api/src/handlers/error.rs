//! Mapping from domain errors to HTTP responses
//!
//! Handlers return `Result<HttpResponse, ApiError>` and use `?` on service
//! calls. Expected errors are answered with their own message. Anything else
//! is logged in full and answered with a generic 500.

use actix_web::{
    http::{header::RETRY_AFTER, StatusCode},
    HttpResponse, ResponseError,
};
use tb_core::errors::{
    AuthError, DomainError, ReviewError, TokenError, UnauthenticatedReason, ValidationError,
};
use tb_shared::{error_codes, ErrorResponse, ErrorStatus};
use validator::ValidationErrors;

/// Message for errors whose detail must not reach clients
pub const GENERIC_ERROR_MESSAGE: &str = "Something went very wrong!";

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub DomainError);

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        ApiError(error.into())
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        ApiError(error.into())
    }
}

impl From<ReviewError> for ApiError {
    fn from(error: ReviewError) -> Self {
        ApiError(error.into())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let reason = errs
                    .first()
                    .and_then(|e| e.message.as_ref().map(|m| m.to_string()))
                    .unwrap_or_else(|| "is invalid".to_string());
                format!("{} {}", field, reason)
            })
            .collect();
        fields.sort();

        ApiError(DomainError::Validation {
            message: format!("Invalid input data. {}", fields.join(". ")),
        })
    }
}

impl ApiError {
    /// Status code and stable error code for the wrapped error
    pub fn classify(&self) -> (StatusCode, &'static str) {
        match &self.0 {
            DomainError::Auth(auth_error) => match auth_error {
                AuthError::Unauthenticated(UnauthenticatedReason::TokenExpired) => {
                    (StatusCode::UNAUTHORIZED, error_codes::TOKEN_EXPIRED)
                }
                AuthError::Unauthenticated(UnauthenticatedReason::InvalidToken) => {
                    (StatusCode::UNAUTHORIZED, error_codes::TOKEN_INVALID)
                }
                AuthError::Unauthenticated(_) => (StatusCode::UNAUTHORIZED, error_codes::UNAUTHORIZED),
                AuthError::Forbidden => (StatusCode::FORBIDDEN, error_codes::FORBIDDEN),
                AuthError::InvalidCredential | AuthError::IncorrectCurrentPassword => {
                    (StatusCode::UNAUTHORIZED, error_codes::INVALID_CREDENTIALS)
                }
                AuthError::UserNotFound => (StatusCode::NOT_FOUND, error_codes::NOT_FOUND),
                AuthError::UserAlreadyExists => (StatusCode::CONFLICT, error_codes::CONFLICT),
                AuthError::ResetTokenInvalidOrExpired => {
                    (StatusCode::BAD_REQUEST, error_codes::RESET_TOKEN_INVALID)
                }
                AuthError::EmailDeliveryFailure => {
                    (StatusCode::INTERNAL_SERVER_ERROR, error_codes::EMAIL_DELIVERY_FAILED)
                }
            },
            DomainError::Token(token_error) => match token_error {
                TokenError::TokenGenerationFailed => {
                    (StatusCode::INTERNAL_SERVER_ERROR, error_codes::INTERNAL_ERROR)
                }
                TokenError::TokenExpired => (StatusCode::UNAUTHORIZED, error_codes::TOKEN_EXPIRED),
                TokenError::InvalidTokenFormat
                | TokenError::InvalidSignature
                | TokenError::TokenNotYetValid
                | TokenError::InvalidClaims => (StatusCode::UNAUTHORIZED, error_codes::TOKEN_INVALID),
            },
            DomainError::Review(review_error) => match review_error {
                ReviewError::AlreadyReviewed => (StatusCode::CONFLICT, error_codes::CONFLICT),
                ReviewError::ReviewNotFound | ReviewError::TourNotFound => {
                    (StatusCode::NOT_FOUND, error_codes::NOT_FOUND)
                }
                ReviewError::InvalidRating { .. } | ReviewError::EmptyReview => {
                    (StatusCode::BAD_REQUEST, error_codes::VALIDATION_ERROR)
                }
            },
            DomainError::ValidationErr(_) | DomainError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, error_codes::VALIDATION_ERROR)
            }
            DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, error_codes::NOT_FOUND),
            DomainError::RateLimited { .. } => {
                (StatusCode::TOO_MANY_REQUESTS, error_codes::RATE_LIMIT_EXCEEDED)
            }
            DomainError::Internal { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, error_codes::INTERNAL_ERROR)
            }
        }
    }

    /// Client-facing message
    pub fn public_message(&self) -> String {
        if self.0.is_operational() {
            self.0.to_string()
        } else {
            GENERIC_ERROR_MESSAGE.to_string()
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.classify().0
    }

    fn error_response(&self) -> HttpResponse {
        let (status, code) = self.classify();

        if self.0.is_operational() {
            tracing::debug!(status = status.as_u16(), error = %self.0, "Request failed");
        } else {
            tracing::error!(status = status.as_u16(), error = ?self.0, "Unexpected error");
        }

        let body = ErrorResponse::new(
            ErrorStatus::from_http_status(status.as_u16()),
            code,
            self.public_message(),
        );
        let mut response = HttpResponse::build(status);
        if let DomainError::RateLimited { retry_after_seconds } = &self.0 {
            response.insert_header((RETRY_AFTER, retry_after_seconds.to_string()));
        }
        response.json(body)
    }
}

/// JSON error body for failures raised outside of a handler
pub fn error_body(status: StatusCode, code: &str, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse::new(
        ErrorStatus::from_http_status(status.as_u16()),
        code,
        message,
    ))
}
