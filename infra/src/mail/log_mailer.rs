//! Mailer that only logs, for development and tests

use async_trait::async_trait;
use tb_core::services::mail::{Mailer, Recipient};

use super::templates::{self, MailContent};

/// Writes outgoing mail to the tracing log instead of delivering it
///
/// Recipient and subject are logged at `info`. The body carries the reset
/// link, so it only appears at `debug`.
#[derive(Debug, Clone)]
pub struct LogMailer {
    from: String,
}

impl LogMailer {
    pub fn new(from: impl Into<String>) -> Self {
        Self { from: from.into() }
    }

    fn log(&self, to: &Recipient, content: &MailContent) {
        tracing::info!(
            from = %self.from,
            to = %to.email,
            subject = %content.subject,
            "Mail not delivered (log mailer)"
        );
        tracing::debug!(to = %to.email, body = %content.text, "Mail body");
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send_welcome(&self, to: &Recipient, url: &str) -> Result<(), String> {
        self.log(to, &templates::welcome(to, url));
        Ok(())
    }

    async fn send_password_reset(
        &self,
        to: &Recipient,
        url: &str,
        expires_in_minutes: i64,
    ) -> Result<(), String> {
        self.log(to, &templates::password_reset(to, url, expires_in_minutes));
        Ok(())
    }
}
