//! Review repository trait.
//!
//! Besides CRUD it exposes [`ReviewRepository::rating_summary`], the full
//! rescan the rating aggregator is built on. Implementations enforce at most
//! one review per `(tour_id, user_id)` at the storage level.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::review::Review;
use crate::errors::DomainError;

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Insert a new review
    ///
    /// # Returns
    /// * `Err(DomainError::Review(ReviewError::AlreadyReviewed))` - The author already reviewed this tour
    async fn create(&self, review: Review) -> Result<Review, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Review>, DomainError>;

    /// List reviews, newest first, optionally restricted to one tour
    async fn list(&self, tour_id: Option<Uuid>) -> Result<Vec<Review>, DomainError>;

    /// Persist the text and rating of an existing review
    ///
    /// # Returns
    /// * `Err(DomainError::Review(ReviewError::ReviewNotFound))` - No review with this id
    async fn update(&self, review: Review) -> Result<Review, DomainError>;

    /// Delete a review, returning whether it existed
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Count and mean rating over all current reviews of a tour
    ///
    /// The mean is `None` when the tour has no reviews.
    async fn rating_summary(&self, tour_id: Uuid) -> Result<(u32, Option<f64>), DomainError>;
}
