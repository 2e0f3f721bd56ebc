//! Domain entities representing core business objects.

pub mod review;
pub mod token;
pub mod tour;
pub mod user;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use review::{Review, ReviewPatch};
pub use token::{Claims, IssuedToken, JWT_AUDIENCE, JWT_ISSUER};
pub use tour::Tour;
pub use user::{User, UserRole, DEFAULT_PHOTO};
