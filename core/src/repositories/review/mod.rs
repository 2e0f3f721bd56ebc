pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
mod mock;

#[cfg(test)]
mod tests;

pub use mock::MockReviewRepository;
pub use r#trait::ReviewRepository;
