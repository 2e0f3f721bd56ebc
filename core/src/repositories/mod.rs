pub mod review;
pub mod tour;
pub mod user;

pub use review::{MockReviewRepository, ReviewRepository};
pub use tour::{MockTourRepository, TourRepository};
pub use user::{MockUserRepository, UserRepository};
