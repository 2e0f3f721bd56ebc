//! Trait for request rate limiting

use async_trait::async_trait;
use std::time::Duration;

use crate::errors::DomainResult;

#[async_trait]
pub trait RateLimiter: Send + Sync {
    /// Count one request for `key`
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Request allowed and recorded
    /// * `Err(DomainError::RateLimited)` - `max_requests` already used up in the current window
    async fn check_and_record(&self, key: &str, max_requests: u32, window: Duration) -> DomainResult<()>;
}
