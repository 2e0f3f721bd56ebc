pub mod auth;
pub mod rate_limit;

pub use auth::{extract_token, CurrentUser, JwtAuth, MaybeUser};
pub use rate_limit::RateLimit;
