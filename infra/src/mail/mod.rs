//! Outbound mail
//!
//! Two [`Mailer`] implementations are available, selected by
//! [`MailConfig::provider`]:
//!
//! - [`SmtpMailer`]: real delivery over SMTP with STARTTLS (lettre)
//! - [`LogMailer`]: writes messages to the tracing log, for development

mod log_mailer;
mod smtp;
pub mod templates;

pub use log_mailer::LogMailer;
pub use smtp::SmtpMailer;
pub use templates::MailContent;

use async_trait::async_trait;
use tb_core::services::mail::{Mailer, Recipient};
use tb_shared::config::{MailConfig, MailProvider};

use crate::InfrastructureError;

/// The mailer chosen at startup
pub enum ConfiguredMailer {
    Smtp(SmtpMailer),
    Log(LogMailer),
}

impl ConfiguredMailer {
    /// Build the mailer named by `config.provider`
    pub fn from_config(config: &MailConfig) -> Result<Self, InfrastructureError> {
        match config.provider {
            MailProvider::Smtp => {
                tracing::info!(host = %config.host, port = config.port, "Using SMTP mailer");
                Ok(ConfiguredMailer::Smtp(SmtpMailer::new(config)?))
            }
            MailProvider::Log => {
                tracing::info!("Using log mailer, messages are not delivered");
                Ok(ConfiguredMailer::Log(LogMailer::new(&config.from)))
            }
        }
    }

    fn inner(&self) -> &dyn Mailer {
        match self {
            ConfiguredMailer::Smtp(mailer) => mailer,
            ConfiguredMailer::Log(mailer) => mailer,
        }
    }
}

#[async_trait]
impl Mailer for ConfiguredMailer {
    async fn send_welcome(&self, to: &Recipient, url: &str) -> Result<(), String> {
        self.inner().send_welcome(to, url).await
    }

    async fn send_password_reset(
        &self,
        to: &Recipient,
        url: &str,
        expires_in_minutes: i64,
    ) -> Result<(), String> {
        self.inner()
            .send_password_reset(to, url, expires_in_minutes)
            .await
    }
}
