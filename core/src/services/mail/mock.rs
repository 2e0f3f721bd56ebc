//! Recording mailer for tests and local runs

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use super::traits::{Mailer, Recipient};

/// A message captured by [`MockMailer`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentMail {
    Welcome { to: String, url: String },
    PasswordReset { to: String, url: String, expires_in_minutes: i64 },
}

impl SentMail {
    pub fn to(&self) -> &str {
        match self {
            SentMail::Welcome { to, .. } | SentMail::PasswordReset { to, .. } => to,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            SentMail::Welcome { url, .. } | SentMail::PasswordReset { url, .. } => url,
        }
    }
}

/// Mock mailer that records every message instead of delivering it
#[derive(Clone, Default)]
pub struct MockMailer {
    sent: Arc<RwLock<Vec<SentMail>>>,
    should_fail: Arc<AtomicBool>,
}

impl MockMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mailer whose every send fails
    pub fn failing() -> Self {
        let mailer = Self::default();
        mailer.set_failing(true);
        mailer
    }

    pub fn set_failing(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    pub async fn sent(&self) -> Vec<SentMail> {
        self.sent.read().await.clone()
    }

    /// Most recent password reset message, if any
    pub async fn last_reset(&self) -> Option<SentMail> {
        self.sent
            .read()
            .await
            .iter()
            .rev()
            .find(|m| matches!(m, SentMail::PasswordReset { .. }))
            .cloned()
    }

    async fn record(&self, mail: SentMail) -> Result<(), String> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err("Mail service error".to_string());
        }
        self.sent.write().await.push(mail);
        Ok(())
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send_welcome(&self, to: &Recipient, url: &str) -> Result<(), String> {
        self.record(SentMail::Welcome {
            to: to.email.clone(),
            url: url.to_string(),
        })
        .await
    }

    async fn send_password_reset(
        &self,
        to: &Recipient,
        url: &str,
        expires_in_minutes: i64,
    ) -> Result<(), String> {
        self.record(SentMail::PasswordReset {
            to: to.email.clone(),
            url: url.to_string(),
            expires_in_minutes,
        })
        .await
    }
}
