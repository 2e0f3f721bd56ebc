//! MySQL implementation of the ReviewRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use tb_core::domain::entities::review::Review;
use tb_core::errors::{DomainError, ReviewError};
use tb_core::repositories::ReviewRepository;

use super::{get_column, get_uuid, is_unique_violation, storage_error};

/// MySQL implementation of ReviewRepository
///
/// The `(tour_id, user_id)` unique key on `reviews` backs the one review per
/// author and tour rule.
pub struct MySqlReviewRepository {
    pool: MySqlPool,
}

impl MySqlReviewRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_review(row: &MySqlRow) -> Result<Review, DomainError> {
        Ok(Review {
            id: get_uuid(row, "id")?,
            review: get_column(row, "review")?,
            rating: get_column(row, "rating")?,
            tour_id: get_uuid(row, "tour_id")?,
            user_id: get_uuid(row, "user_id")?,
            created_at: get_column::<DateTime<Utc>>(row, "created_at")?,
        })
    }
}

#[async_trait]
impl ReviewRepository for MySqlReviewRepository {
    async fn create(&self, review: Review) -> Result<Review, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO reviews (id, review, rating, tour_id, user_id, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(review.id.to_string())
        .bind(&review.review)
        .bind(review.rating)
        .bind(review.tour_id.to_string())
        .bind(review.user_id.to_string())
        .bind(review.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                DomainError::from(ReviewError::AlreadyReviewed)
            } else {
                storage_error("create review", e)
            }
        })?;

        Ok(review)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Review>, DomainError> {
        let row = sqlx::query(
            "SELECT id, review, rating, tour_id, user_id, created_at FROM reviews WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| storage_error("load review", e))?;

        row.as_ref().map(Self::row_to_review).transpose()
    }

    async fn list(&self, tour_id: Option<Uuid>) -> Result<Vec<Review>, DomainError> {
        let rows = match tour_id {
            Some(tour_id) => {
                sqlx::query(
                    r#"
                    SELECT id, review, rating, tour_id, user_id, created_at
                    FROM reviews
                    WHERE tour_id = ?
                    ORDER BY created_at DESC
                    "#,
                )
                .bind(tour_id.to_string())
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query(
                    r#"
                    SELECT id, review, rating, tour_id, user_id, created_at
                    FROM reviews
                    ORDER BY created_at DESC
                    "#,
                )
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| storage_error("list reviews", e))?;

        rows.iter().map(Self::row_to_review).collect()
    }

    async fn update(&self, review: Review) -> Result<Review, DomainError> {
        let result = sqlx::query("UPDATE reviews SET review = ?, rating = ? WHERE id = ?")
            .bind(&review.review)
            .bind(review.rating)
            .bind(review.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("update review", e))?;

        if result.rows_affected() == 0 {
            return Err(ReviewError::ReviewNotFound.into());
        }

        Ok(review)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("delete review", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn rating_summary(&self, tour_id: Uuid) -> Result<(u32, Option<f64>), DomainError> {
        // AVG over an integer column is DECIMAL in MySQL
        let row = sqlx::query(
            r#"
            SELECT COUNT(*) AS n_rating, CAST(AVG(rating) AS DOUBLE) AS avg_rating
            FROM reviews
            WHERE tour_id = ?
            "#,
        )
        .bind(tour_id.to_string())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| storage_error("summarize ratings", e))?;

        let count: i64 = row
            .try_get("n_rating")
            .map_err(|e| storage_error("read rating count", e))?;
        let average: Option<f64> = row
            .try_get("avg_rating")
            .map_err(|e| storage_error("read rating average", e))?;

        let count = u32::try_from(count)
            .map_err(|_| DomainError::internal(format!("Rating count out of range: {}", count)))?;

        Ok((count, average))
    }
}
