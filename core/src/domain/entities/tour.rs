//! Tour entity, reduced to what review validation and rating aggregation need.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::RatingStats;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    pub id: Uuid,
    pub name: String,
    pub slug: String,

    /// Price in the smallest currency unit
    pub price: u32,

    /// Mean of all review ratings, or the configured default when there are none
    pub ratings_average: f64,

    /// Number of reviews
    pub ratings_quantity: u32,

    pub created_at: DateTime<Utc>,
}

impl Tour {
    /// Creates a tour with no reviews yet
    pub fn new(name: impl Into<String>, price: u32, default_average: f64) -> Self {
        let name = name.into();
        Self {
            id: Uuid::new_v4(),
            slug: slugify(&name),
            name,
            price,
            ratings_average: default_average,
            ratings_quantity: 0,
            created_at: Utc::now(),
        }
    }

    pub fn rating_stats(&self) -> RatingStats {
        RatingStats {
            count: self.ratings_quantity,
            average: self.ratings_average,
        }
    }

    pub fn apply_rating_stats(&mut self, stats: RatingStats) {
        self.ratings_quantity = stats.count;
        self.ratings_average = stats.average;
    }
}

/// Lower-cased, dash-separated form of a tour name
fn slugify(name: &str) -> String {
    name.split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| part.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}
