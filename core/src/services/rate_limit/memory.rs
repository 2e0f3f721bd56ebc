//! Fixed-window rate limiter held in process memory

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::errors::{DomainError, DomainResult};

use super::traits::RateLimiter;

#[derive(Debug, Clone, Copy)]
struct Window {
    started: Instant,
    count: u32,
}

/// Counts requests per key in windows that start with the key's first request
#[derive(Debug, Clone, Default)]
pub struct InMemoryRateLimiter {
    windows: Arc<Mutex<HashMap<String, Window>>>,
}

impl InMemoryRateLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys with an open window
    pub async fn tracked_keys(&self) -> usize {
        self.windows.lock().await.len()
    }
}

#[async_trait]
impl RateLimiter for InMemoryRateLimiter {
    async fn check_and_record(&self, key: &str, max_requests: u32, window: Duration) -> DomainResult<()> {
        let now = Instant::now();
        let mut windows = self.windows.lock().await;

        // Closed windows are dropped so the map only holds active clients
        windows.retain(|_, w| now.duration_since(w.started) < window);

        let entry = windows.entry(key.to_string()).or_insert(Window {
            started: now,
            count: 0,
        });

        if entry.count >= max_requests {
            let elapsed = now.duration_since(entry.started);
            let retry_after_seconds = window.saturating_sub(elapsed).as_secs().max(1);
            tracing::warn!(key = %key, limit = max_requests, retry_after_seconds, "Rate limit exceeded");
            return Err(DomainError::RateLimited { retry_after_seconds });
        }

        entry.count += 1;
        Ok(())
    }
}
