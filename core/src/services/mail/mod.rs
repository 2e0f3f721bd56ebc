//! Outbound mail abstraction
//!
//! The core only decides *when* a message goes out and which link it carries.
//! Transport and templates belong to the implementations in the infra crate.

mod mock;
mod traits;

pub use mock::{MockMailer, SentMail};
pub use traits::{Mailer, Recipient};
