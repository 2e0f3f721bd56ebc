//! # Tourbook Core
//!
//! Core business logic and domain layer for the Tourbook backend.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types. Adapters for HTTP, storage and mail live in the outer crates
//! and only talk to the traits defined here.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
