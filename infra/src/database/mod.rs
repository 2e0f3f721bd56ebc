//! Database module - MySQL implementations using SQLx
//!
//! - Connection pool management and embedded migrations
//! - Repository implementations for users, tours and reviews

pub mod connection;
pub mod mysql;


pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::{MySqlReviewRepository, MySqlTourRepository, MySqlUserRepository};
