//! SMTP mailer using lettre's async transport

use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use tb_core::services::mail::{Mailer, Recipient};
use tb_shared::config::MailConfig;

use super::templates::{self, MailContent};
use crate::InfrastructureError;

/// Delivers mail through an SMTP relay
///
/// With credentials configured the connection is upgraded with STARTTLS.
/// Without them the relay is used in plain text, which only suits local
/// catch-all servers.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &MailConfig) -> Result<Self, InfrastructureError> {
        let from: Mailbox = config
            .from
            .parse()
            .map_err(|e| InfrastructureError::Config(format!("Invalid sender address: {}", e)))?;

        let transport = match (&config.username, &config.password) {
            (Some(username), Some(password)) => {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
                    .map_err(|e| InfrastructureError::Mail(format!("SMTP relay error: {}", e)))?
                    .port(config.port)
                    .credentials(Credentials::new(username.clone(), password.clone()))
                    .build()
            }
            _ => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
                .port(config.port)
                .build(),
        };

        Ok(Self { transport, from })
    }

    fn build_message(&self, to: &Recipient, content: MailContent) -> Result<Message, String> {
        let address: Address = to
            .email
            .parse()
            .map_err(|e| format!("Invalid recipient address: {}", e))?;

        Message::builder()
            .from(self.from.clone())
            .to(Mailbox::new(Some(to.first_name.clone()), address))
            .subject(content.subject)
            .multipart(MultiPart::alternative_plain_html(content.text, content.html))
            .map_err(|e| format!("Failed to build email: {}", e))
    }

    async fn deliver(&self, to: &Recipient, content: MailContent) -> Result<(), String> {
        let message = self.build_message(to, content)?;

        self.transport.send(message).await.map_err(|e| {
            tracing::error!(to = %to.email, error = %e, "SMTP delivery failed");
            format!("Failed to send email: {}", e)
        })?;

        tracing::info!(to = %to.email, "Email sent");
        Ok(())
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send_welcome(&self, to: &Recipient, url: &str) -> Result<(), String> {
        self.deliver(to, templates::welcome(to, url)).await
    }

    async fn send_password_reset(
        &self,
        to: &Recipient,
        url: &str,
        expires_in_minutes: i64,
    ) -> Result<(), String> {
        self.deliver(to, templates::password_reset(to, url, expires_in_minutes))
            .await
    }
}
