//! Review bodies

use serde::{Deserialize, Serialize};
use tb_core::domain::entities::review::{Review, ReviewPatch};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReviewRequest {
    #[serde(default)]
    #[validate(length(max = 2000, message = "must be at most 2000 characters"))]
    pub review: String,

    pub rating: Option<u8>,

    /// Target tour, taken from the path on nested routes
    pub tour: Option<Uuid>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateReviewRequest {
    #[validate(length(max = 2000, message = "must be at most 2000 characters"))]
    pub review: Option<String>,

    pub rating: Option<u8>,
}

impl From<UpdateReviewRequest> for ReviewPatch {
    fn from(req: UpdateReviewRequest) -> Self {
        ReviewPatch {
            review: req.review,
            rating: req.rating,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReviewData {
    pub review: Review,
}

#[derive(Debug, Serialize)]
pub struct ReviewListResponse {
    pub status: &'static str,
    pub results: usize,
    pub data: ReviewListData,
}

#[derive(Debug, Serialize)]
pub struct ReviewListData {
    pub reviews: Vec<Review>,
}

impl From<Vec<Review>> for ReviewListResponse {
    fn from(reviews: Vec<Review>) -> Self {
        Self {
            status: super::SUCCESS,
            results: reviews.len(),
            data: ReviewListData { reviews },
        }
    }
}
