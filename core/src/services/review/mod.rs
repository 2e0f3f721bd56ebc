//! Review write path
//!
//! Every mutation recomputes the rating aggregate of the affected tour
//! explicitly. Update and delete look the review up first to learn which tour
//! that is.

mod service;


pub use service::ReviewService;
