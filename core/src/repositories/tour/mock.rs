//! In-memory implementation of TourRepository for tests and local runs

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::tour::Tour;
use crate::domain::value_objects::RatingStats;
use crate::errors::{DomainError, ReviewError};

use super::trait_::TourRepository;

/// Mock tour repository for testing
#[derive(Clone, Default)]
pub struct MockTourRepository {
    tours: Arc<RwLock<HashMap<Uuid, Tour>>>,
}

impl MockTourRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TourRepository for MockTourRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Tour>, DomainError> {
        let tours = self.tours.read().await;
        Ok(tours.get(&id).cloned())
    }

    async fn create(&self, tour: Tour) -> Result<Tour, DomainError> {
        let mut tours = self.tours.write().await;
        tours.insert(tour.id, tour.clone());
        Ok(tour)
    }

    async fn update_rating_stats(&self, tour_id: Uuid, stats: RatingStats) -> Result<(), DomainError> {
        let mut tours = self.tours.write().await;
        let tour = tours.get_mut(&tour_id).ok_or(ReviewError::TourNotFound)?;
        tour.apply_rating_stats(stats);
        Ok(())
    }
}
