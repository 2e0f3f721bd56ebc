//! Authentication service module
//!
//! This module provides the credential and session flows:
//! - Signup and email/password login
//! - Session token authentication and role authorization
//! - Password reset via emailed one-time tokens
//! - Password change for logged-in users

mod authorize;
mod config;
mod password;
mod reset_token;
mod service;

#[cfg(test)]
mod tests;

pub use authorize::authorize;
pub use config::AuthServiceConfig;
pub use password::{hash_password, verify_password};
pub use reset_token::{generate_reset_token, hash_reset_token};
pub use service::{AuthService, Authenticator, LOGGED_OUT_PLACEHOLDER};
