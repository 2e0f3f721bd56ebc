//! Review service implementation

use std::sync::Arc;
use tb_shared::config::RatingConfig;
use uuid::Uuid;

use crate::domain::entities::review::{Review, ReviewPatch};
use crate::domain::entities::user::{User, UserRole};
use crate::errors::{AuthError, DomainResult, ReviewError};
use crate::repositories::{ReviewRepository, TourRepository};
use crate::services::auth::authorize;
use crate::services::rating::RatingAggregator;

/// Roles allowed to modify or delete a review, subject to the ownership rule
const REVIEW_EDITORS: &[UserRole] = &[UserRole::User, UserRole::Admin];

pub struct ReviewService<R, T>
where
    R: ReviewRepository,
    T: TourRepository,
{
    review_repository: Arc<R>,
    tour_repository: Arc<T>,
    aggregator: RatingAggregator<R, T>,
}

impl<R, T> ReviewService<R, T>
where
    R: ReviewRepository,
    T: TourRepository,
{
    pub fn new(review_repository: Arc<R>, tour_repository: Arc<T>, config: RatingConfig) -> Self {
        let aggregator = RatingAggregator::new(review_repository.clone(), tour_repository.clone(), config);
        Self {
            review_repository,
            tour_repository,
            aggregator,
        }
    }

    /// Write a review of `tour_id` as `author`
    ///
    /// Only plain users review tours, and each user reviews a tour at most once.
    ///
    /// # Returns
    ///
    /// * `Err(AuthError::Forbidden)` - Author is not a `user`
    /// * `Err(ReviewError::TourNotFound)` - Unknown tour
    /// * `Err(ReviewError::AlreadyReviewed)` - Author already reviewed this tour
    pub async fn create_review(
        &self,
        author: &User,
        tour_id: Uuid,
        text: &str,
        rating: u8,
    ) -> DomainResult<Review> {
        authorize(author, &[UserRole::User])?;
        self.validate_text(text)?;
        self.validate_rating(rating)?;

        if self.tour_repository.find_by_id(tour_id).await?.is_none() {
            return Err(ReviewError::TourNotFound.into());
        }

        let review = self
            .review_repository
            .create(Review::new(text, rating, tour_id, author.id))
            .await?;
        tracing::info!(review_id = %review.id, tour_id = %tour_id, user_id = %author.id, "Review created");

        self.aggregator.recompute(tour_id).await?;
        Ok(review)
    }

    pub async fn get_review(&self, id: Uuid) -> DomainResult<Review> {
        self.review_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ReviewError::ReviewNotFound.into())
    }

    /// All reviews, or those of one tour
    pub async fn list_reviews(&self, tour_id: Option<Uuid>) -> DomainResult<Vec<Review>> {
        self.review_repository.list(tour_id).await
    }

    /// Edit the text or rating of a review owned by `actor` (admins may edit any)
    pub async fn update_review(&self, actor: &User, id: Uuid, patch: ReviewPatch) -> DomainResult<Review> {
        let mut review = self.editable_review(actor, id).await?;
        let tour_id = review.tour_id;

        if let Some(text) = &patch.review {
            self.validate_text(text)?;
        }
        if let Some(rating) = patch.rating {
            self.validate_rating(rating)?;
        }

        review.apply(&patch);
        let review = self.review_repository.update(review).await?;

        self.aggregator.recompute(tour_id).await?;
        Ok(review)
    }

    /// Delete a review owned by `actor` (admins may delete any)
    pub async fn delete_review(&self, actor: &User, id: Uuid) -> DomainResult<()> {
        let review = self.editable_review(actor, id).await?;
        let tour_id = review.tour_id;

        if !self.review_repository.delete(id).await? {
            return Err(ReviewError::ReviewNotFound.into());
        }
        tracing::info!(review_id = %id, tour_id = %tour_id, user_id = %actor.id, "Review deleted");

        self.aggregator.recompute(tour_id).await?;
        Ok(())
    }

    /// Fetch a review and check that `actor` may change it
    async fn editable_review(&self, actor: &User, id: Uuid) -> DomainResult<Review> {
        authorize(actor, REVIEW_EDITORS)?;
        let review = self.get_review(id).await?;

        if actor.role != UserRole::Admin && !review.is_authored_by(actor.id) {
            return Err(AuthError::Forbidden.into());
        }
        Ok(review)
    }

    fn validate_text(&self, text: &str) -> Result<(), ReviewError> {
        if text.trim().is_empty() {
            return Err(ReviewError::EmptyReview);
        }
        Ok(())
    }

    fn validate_rating(&self, rating: u8) -> Result<(), ReviewError> {
        let config = self.aggregator.config();
        if !config.accepts(rating) {
            return Err(ReviewError::InvalidRating {
                min: config.min_rating,
                max: config.max_rating,
            });
        }
        Ok(())
    }
}
