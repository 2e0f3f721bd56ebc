//! Review entity: one user's rating of one tour.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: Uuid,

    /// Review text
    pub review: String,

    /// Star rating, validated against `RatingConfig` bounds before storage
    pub rating: u8,

    /// Tour being reviewed
    #[serde(rename = "tour")]
    pub tour_id: Uuid,

    /// Author of the review
    #[serde(rename = "user")]
    pub user_id: Uuid,

    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn new(review: impl Into<String>, rating: u8, tour_id: Uuid, user_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            review: review.into().trim().to_string(),
            rating,
            tour_id,
            user_id,
            created_at: Utc::now(),
        }
    }

    pub fn is_authored_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }

    /// Applies the present fields of `patch`
    pub fn apply(&mut self, patch: &ReviewPatch) {
        if let Some(text) = &patch.review {
            self.review = text.trim().to_string();
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
    }
}

/// Partial update of a review. The tour and author are fixed at creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewPatch {
    pub review: Option<String>,
    pub rating: Option<u8>,
}
