//! Common utility functions

pub mod validation;

pub use validation::{first_name, is_valid_email, normalize_email, password_long_enough};
