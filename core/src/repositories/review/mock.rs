//! In-memory implementation of ReviewRepository for tests and local runs

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::review::Review;
use crate::errors::{DomainError, ReviewError};

use super::trait_::ReviewRepository;

/// Mock review repository for testing
#[derive(Clone, Default)]
pub struct MockReviewRepository {
    reviews: Arc<RwLock<HashMap<Uuid, Review>>>,
}

impl MockReviewRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReviewRepository for MockReviewRepository {
    async fn create(&self, review: Review) -> Result<Review, DomainError> {
        let mut reviews = self.reviews.write().await;

        if reviews
            .values()
            .any(|r| r.tour_id == review.tour_id && r.user_id == review.user_id)
        {
            return Err(ReviewError::AlreadyReviewed.into());
        }

        reviews.insert(review.id, review.clone());
        Ok(review)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Review>, DomainError> {
        let reviews = self.reviews.read().await;
        Ok(reviews.get(&id).cloned())
    }

    async fn list(&self, tour_id: Option<Uuid>) -> Result<Vec<Review>, DomainError> {
        let reviews = self.reviews.read().await;
        let mut found: Vec<Review> = reviews
            .values()
            .filter(|r| tour_id.map_or(true, |t| r.tour_id == t))
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(found)
    }

    async fn update(&self, review: Review) -> Result<Review, DomainError> {
        let mut reviews = self.reviews.write().await;

        match reviews.get_mut(&review.id) {
            Some(stored) => {
                stored.review = review.review.clone();
                stored.rating = review.rating;
                Ok(stored.clone())
            }
            None => Err(ReviewError::ReviewNotFound.into()),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut reviews = self.reviews.write().await;
        Ok(reviews.remove(&id).is_some())
    }

    async fn rating_summary(&self, tour_id: Uuid) -> Result<(u32, Option<f64>), DomainError> {
        let reviews = self.reviews.read().await;
        let ratings: Vec<f64> = reviews
            .values()
            .filter(|r| r.tour_id == tour_id)
            .map(|r| f64::from(r.rating))
            .collect();

        if ratings.is_empty() {
            return Ok((0, None));
        }
        let count = ratings.len() as u32;
        let mean = ratings.iter().sum::<f64>() / ratings.len() as f64;
        Ok((count, Some(mean)))
    }
}
