//! Tour repository trait, limited to what reviews and rating aggregation need.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::tour::Tour;
use crate::domain::value_objects::RatingStats;
use crate::errors::DomainError;

#[async_trait]
pub trait TourRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Tour>, DomainError>;

    async fn create(&self, tour: Tour) -> Result<Tour, DomainError>;

    /// Overwrite the denormalized rating aggregate of a tour
    ///
    /// Last write wins. Returns `ReviewError::TourNotFound` if the tour is gone.
    async fn update_rating_stats(&self, tour_id: Uuid, stats: RatingStats) -> Result<(), DomainError>;
}
