//! Business services containing domain logic and use cases.

pub mod auth;
pub mod mail;
pub mod rate_limit;
pub mod rating;
pub mod review;
pub mod token;

// Re-export commonly used types
pub use auth::{authorize, Authenticator, AuthService, AuthServiceConfig};
pub use mail::{Mailer, MockMailer, Recipient, SentMail};
pub use rate_limit::{InMemoryRateLimiter, RateLimiter};
pub use rating::RatingAggregator;
pub use review::ReviewService;
pub use token::{TokenService, TokenServiceConfig};
