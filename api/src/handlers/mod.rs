//! Cross-cutting request handling

pub mod error;

pub use error::{error_body, ApiError, GENERIC_ERROR_MESSAGE};
