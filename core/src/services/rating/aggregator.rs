//! Rating aggregator implementation

use std::sync::Arc;
use tb_shared::config::RatingConfig;
use uuid::Uuid;

use crate::domain::value_objects::RatingStats;
use crate::errors::DomainResult;
use crate::repositories::{ReviewRepository, TourRepository};

pub struct RatingAggregator<R, T>
where
    R: ReviewRepository,
    T: TourRepository,
{
    review_repository: Arc<R>,
    tour_repository: Arc<T>,
    config: RatingConfig,
}

impl<R, T> RatingAggregator<R, T>
where
    R: ReviewRepository,
    T: TourRepository,
{
    pub fn new(review_repository: Arc<R>, tour_repository: Arc<T>, config: RatingConfig) -> Self {
        Self {
            review_repository,
            tour_repository,
            config,
        }
    }

    /// Recount the reviews of `tour_id` and store the result on the tour
    ///
    /// Idempotent. With no reviews left the average falls back to the
    /// configured default.
    pub async fn recompute(&self, tour_id: Uuid) -> DomainResult<RatingStats> {
        let (count, mean) = self.review_repository.rating_summary(tour_id).await?;
        let stats = RatingStats::from_summary(count, mean, self.config.default_average);

        self.tour_repository.update_rating_stats(tour_id, stats).await?;

        tracing::debug!(
            tour_id = %tour_id,
            ratings_quantity = stats.count,
            ratings_average = stats.average,
            "Recomputed tour rating"
        );
        Ok(stats)
    }

    pub fn config(&self) -> &RatingConfig {
        &self.config
    }
}
