//! Route handlers
//!
//! - `users`: signup, login, logout, password flows and the current user
//! - `reviews`: review CRUD, top level and nested under tours
//! - `health`: liveness check

pub mod health;
pub mod reviews;
pub mod users;
