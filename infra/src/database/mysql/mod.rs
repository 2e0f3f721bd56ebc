//! MySQL repository implementations

mod review_repository_impl;
mod tour_repository_impl;
mod user_repository_impl;

pub use review_repository_impl::MySqlReviewRepository;
pub use tour_repository_impl::MySqlTourRepository;
pub use user_repository_impl::MySqlUserRepository;

use sqlx::mysql::MySqlRow;
use sqlx::Row;
use tb_core::errors::DomainError;
use uuid::Uuid;

/// True for MySQL error 1062 (duplicate entry on a unique key)
pub(crate) fn is_unique_violation(error: &sqlx::Error) -> bool {
    match error {
        sqlx::Error::Database(db) => db.is_unique_violation(),
        _ => false,
    }
}

/// Wraps a storage failure; the detail is logged by the HTTP layer, never shown
pub(crate) fn storage_error(action: &str, error: sqlx::Error) -> DomainError {
    DomainError::internal(format!("Failed to {}: {}", action, error))
}

pub(crate) fn get_column<'r, T>(row: &'r MySqlRow, column: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::MySql> + sqlx::Type<sqlx::MySql>,
{
    row.try_get(column)
        .map_err(|e| DomainError::internal(format!("Failed to get {}: {}", column, e)))
}

pub(crate) fn get_uuid(row: &MySqlRow, column: &str) -> Result<Uuid, DomainError> {
    let raw: String = get_column(row, column)?;
    Uuid::parse_str(&raw)
        .map_err(|e| DomainError::internal(format!("Invalid UUID in {}: {}", column, e)))
}
