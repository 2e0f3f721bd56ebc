//! Review rating configuration

use serde::{Deserialize, Serialize};

use super::env_or;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RatingConfig {
    /// Average reported for a tour with no reviews
    pub default_average: f64,

    /// Lowest accepted rating
    pub min_rating: u8,

    /// Highest accepted rating
    pub max_rating: u8,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            default_average: 4.5,
            min_rating: 1,
            max_rating: 5,
        }
    }
}

impl RatingConfig {
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    pub(crate) fn with_env_overrides(self) -> Self {
        Self {
            default_average: env_or("RATING_DEFAULT_AVERAGE", self.default_average),
            ..self
        }
    }

    /// Whether `rating` lies inside the accepted range
    pub fn accepts(&self, rating: u8) -> bool {
        (self.min_rating..=self.max_rating).contains(&rating)
    }
}
