//! Trait for mail delivery integration

use async_trait::async_trait;

use crate::domain::entities::user::User;

/// Addressee of an outbound message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    pub email: String,
    /// First word of the display name, used in the greeting
    pub first_name: String,
}

impl From<&User> for Recipient {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            first_name: user.first_name().to_string(),
        }
    }
}

/// Trait for mail delivery integration
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Greet a freshly registered user, linking to their account page
    async fn send_welcome(&self, to: &Recipient, url: &str) -> Result<(), String>;

    /// Send the password reset link
    async fn send_password_reset(
        &self,
        to: &Recipient,
        url: &str,
        expires_in_minutes: i64,
    ) -> Result<(), String>;
}
