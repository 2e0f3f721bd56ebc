//! User repository trait defining the interface for user data persistence.
//!
//! The trait is async-first and uses `Result` types for error handling.
//! Implementations map storage failures to [`DomainError::Internal`] and
//! uniqueness violations on email to [`AuthError::UserAlreadyExists`].
//!
//! [`AuthError::UserAlreadyExists`]: crate::errors::AuthError::UserAlreadyExists

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// # Example
/// ```no_run
/// # use tb_core::repositories::UserRepository;
/// # async fn example(repo: &impl UserRepository) -> Result<(), Box<dyn std::error::Error>> {
/// match repo.find_by_email("laura@example.com").await? {
///     Some(user) => println!("User found: {:?}", user.id),
///     None => println!("User not found"),
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by email address
    ///
    /// `email` must already be normalized (trimmed, lower-cased).
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find the user holding a pending reset token with the given digest
    ///
    /// Only matches when the stored expiry is strictly after `now`.
    async fn find_by_reset_token(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<User>, DomainError>;

    /// Insert a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The stored user
    /// * `Err(DomainError::Auth(AuthError::UserAlreadyExists))` - Email is taken
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Persist every field of an existing user
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - No user with this id
    async fn update(&self, user: User) -> Result<User, DomainError>;
}
