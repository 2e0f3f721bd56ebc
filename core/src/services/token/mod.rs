//! Token service module for JWT session management
//!
//! Sessions are stateless: a token is valid if its signature, issuer,
//! audience and expiry check out. Revocation happens indirectly, through
//! the user's `password_changed_at`, which the auth service compares against `iat`.

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
