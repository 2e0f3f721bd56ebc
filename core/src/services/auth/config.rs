//! Configuration for the authentication service

use tb_shared::config::PasswordConfig;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// bcrypt work factor
    pub bcrypt_cost: u32,
    /// Minimum accepted password length in characters
    pub min_password_length: usize,
    /// How long an emailed reset token stays valid
    pub reset_token_ttl_minutes: i64,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self::from(&PasswordConfig::default())
    }
}

impl From<&PasswordConfig> for AuthServiceConfig {
    fn from(password: &PasswordConfig) -> Self {
        Self {
            bcrypt_cost: password.bcrypt_cost,
            min_password_length: password.min_length,
            reset_token_ttl_minutes: password.reset_token_ttl_minutes,
        }
    }
}
