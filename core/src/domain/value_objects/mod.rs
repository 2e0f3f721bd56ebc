//! Value objects representing immutable domain concepts.

pub mod auth_session;
pub mod rating_stats;

// Re-export commonly used types
pub use auth_session::AuthSession;
pub use rating_stats::RatingStats;
