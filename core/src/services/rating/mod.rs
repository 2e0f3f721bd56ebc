//! Rating aggregation
//!
//! Keeps `ratings_quantity` and `ratings_average` on a tour equal to the count
//! and mean over its current reviews. Every recompute is a full rescan, so a
//! lost or reordered write is repaired by the next one.

mod aggregator;


pub use aggregator::RatingAggregator;
