//! MySQL implementation of the TourRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use tb_core::domain::entities::tour::Tour;
use tb_core::domain::value_objects::RatingStats;
use tb_core::errors::{DomainError, ReviewError};
use tb_core::repositories::TourRepository;

use super::{get_column, get_uuid, storage_error};

/// MySQL implementation of TourRepository
pub struct MySqlTourRepository {
    pool: MySqlPool,
}

impl MySqlTourRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_tour(row: &MySqlRow) -> Result<Tour, DomainError> {
        Ok(Tour {
            id: get_uuid(row, "id")?,
            name: get_column(row, "name")?,
            slug: get_column(row, "slug")?,
            price: get_column(row, "price")?,
            ratings_average: get_column(row, "ratings_average")?,
            ratings_quantity: get_column(row, "ratings_quantity")?,
            created_at: get_column::<DateTime<Utc>>(row, "created_at")?,
        })
    }
}

#[async_trait]
impl TourRepository for MySqlTourRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Tour>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, slug, price, ratings_average, ratings_quantity, created_at
            FROM tours
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| storage_error("load tour", e))?;

        row.as_ref().map(Self::row_to_tour).transpose()
    }

    async fn create(&self, tour: Tour) -> Result<Tour, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO tours (id, name, slug, price, ratings_average, ratings_quantity, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(tour.id.to_string())
        .bind(&tour.name)
        .bind(&tour.slug)
        .bind(tour.price)
        .bind(tour.ratings_average)
        .bind(tour.ratings_quantity)
        .bind(tour.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| storage_error("create tour", e))?;

        Ok(tour)
    }

    async fn update_rating_stats(&self, tour_id: Uuid, stats: RatingStats) -> Result<(), DomainError> {
        let result = sqlx::query(
            "UPDATE tours SET ratings_quantity = ?, ratings_average = ? WHERE id = ?",
        )
        .bind(stats.count)
        .bind(stats.average)
        .bind(tour_id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| storage_error("update tour ratings", e))?;

        // Unchanged rows still count: sqlx connects with CLIENT_FOUND_ROWS
        if result.rows_affected() == 0 {
            return Err(ReviewError::TourNotFound.into());
        }

        Ok(())
    }
}
