//! Denormalized rating aggregate of a tour.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingStats {
    /// Number of reviews
    pub count: u32,

    /// Mean rating, or the default average when `count` is zero
    pub average: f64,
}

impl RatingStats {
    /// Builds stats from a raw `(count, mean)` summary
    pub fn from_summary(count: u32, mean: Option<f64>, default_average: f64) -> Self {
        match (count, mean) {
            (0, _) | (_, None) => Self {
                count: 0,
                average: default_average,
            },
            (count, Some(mean)) => Self {
                count,
                average: mean,
            },
        }
    }
}

