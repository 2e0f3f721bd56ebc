//! Domain-specific error types for authentication, reviews and related operations
//!
//! The `Display` text of every variant below is client-facing. The HTTP layer
//! decides status codes; it never rewrites these messages for operational errors.

use thiserror::Error;

/// Why a request could not be tied to a user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnauthenticatedReason {
    MissingToken,
    InvalidToken,
    TokenExpired,
    UserNoLongerExists,
    PasswordChanged,
}

impl std::fmt::Display for UnauthenticatedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            UnauthenticatedReason::MissingToken => "You are not logged in! Please log in to get access.",
            UnauthenticatedReason::InvalidToken => "Invalid token. Please log in again!",
            UnauthenticatedReason::TokenExpired => "Your token has expired! Please log in again.",
            UnauthenticatedReason::UserNoLongerExists => {
                "The user belonging to this token no longer exists."
            }
            UnauthenticatedReason::PasswordChanged => "User recently changed password! Please log in again.",
        };
        f.write_str(message)
    }
}

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("{0}")]
    Unauthenticated(UnauthenticatedReason),

    #[error("You do not have permission to perform this action")]
    Forbidden,

    #[error("Incorrect email or password")]
    InvalidCredential,

    #[error("Your current password is wrong")]
    IncorrectCurrentPassword,

    #[error("There is no user with that email address")]
    UserNotFound,

    #[error("A user with this email already exists")]
    UserAlreadyExists,

    #[error("Token is invalid or has expired")]
    ResetTokenInvalidOrExpired,

    #[error("There was an error sending the email. Try again later!")]
    EmailDeliveryFailure,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Token not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token claims")]
    InvalidClaims,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

impl From<TokenError> for UnauthenticatedReason {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::TokenExpired => UnauthenticatedReason::TokenExpired,
            _ => UnauthenticatedReason::InvalidToken,
        }
    }
}

/// Validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please provide {field}")]
    RequiredField { field: String },

    #[error("Please provide a valid email")]
    InvalidEmail,

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("Passwords are not the same")]
    PasswordMismatch,
}

impl ValidationError {
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::RequiredField { field: field.into() }
    }
}

/// Review and rating errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReviewError {
    #[error("You have already reviewed this tour")]
    AlreadyReviewed,

    #[error("No review found with that ID")]
    ReviewNotFound,

    #[error("No tour found with that ID")]
    TourNotFound,

    #[error("Rating must be between {min} and {max}")]
    InvalidRating { min: u8, max: u8 },

    #[error("Review can not be empty")]
    EmptyReview,
}
