pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
mod mock;


pub use mock::MockTourRepository;
pub use r#trait::TourRepository;
