//! Outbound mail configuration

use serde::{Deserialize, Serialize};

use super::env_or;

/// Which mailer implementation the server wires in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MailProvider {
    /// Deliver through an SMTP relay
    Smtp,
    /// Write messages to the log only
    #[default]
    Log,
}

impl std::str::FromStr for MailProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "smtp" => Ok(MailProvider::Smtp),
            "log" | "console" => Ok(MailProvider::Log),
            _ => Err(format!("Invalid mail provider: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    pub provider: MailProvider,

    /// SMTP relay host
    pub host: String,

    /// SMTP relay port
    pub port: u16,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default, skip_serializing)]
    pub password: Option<String>,

    /// Sender mailbox, e.g. `Tourbook <hello@tourbook.io>`
    pub from: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: MailProvider::default(),
            host: String::from("localhost"),
            port: 587,
            username: None,
            password: None,
            from: String::from("Tourbook <hello@tourbook.io>"),
        }
    }
}

impl MailConfig {
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    pub(crate) fn with_env_overrides(self) -> Self {
        Self {
            provider: env_or("MAIL_PROVIDER", self.provider),
            host: std::env::var("EMAIL_HOST").unwrap_or(self.host),
            port: env_or("EMAIL_PORT", self.port),
            username: std::env::var("EMAIL_USERNAME").ok().or(self.username),
            password: std::env::var("EMAIL_PASSWORD").ok().or(self.password),
            from: std::env::var("EMAIL_FROM").unwrap_or(self.from),
        }
    }
}
