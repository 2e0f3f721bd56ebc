//! Per-client request budgets
//!
//! The HTTP layer asks a [`RateLimiter`] before letting a request through.
//! [`InMemoryRateLimiter`] keeps fixed windows in process memory, which is
//! enough for a single API instance.

mod memory;
mod traits;


pub use memory::InMemoryRateLimiter;
pub use traits::RateLimiter;
