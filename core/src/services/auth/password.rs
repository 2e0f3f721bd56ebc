//! bcrypt password hashing
//!
//! Hashing is CPU-bound, so both helpers run on the blocking thread pool.

use crate::errors::DomainError;

pub async fn hash_password(password: &str, cost: u32) -> Result<String, DomainError> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| DomainError::internal(format!("password hashing task failed: {}", e)))?
        .map_err(|e| DomainError::internal(format!("password hashing failed: {}", e)))
}

/// Checks `candidate` against a stored hash. A malformed hash never verifies.
pub async fn verify_password(candidate: &str, hash: &str) -> Result<bool, DomainError> {
    let candidate = candidate.to_owned();
    let hash = hash.to_owned();
    tokio::task::spawn_blocking(move || bcrypt::verify(candidate, &hash).unwrap_or(false))
        .await
        .map_err(|e| DomainError::internal(format!("password verification task failed: {}", e)))
}
