//! Authentication and authorization configuration

use serde::{Deserialize, Serialize};

use super::env_or;

const DEFAULT_SECRET: &str = "your-secret-key-change-in-production";

/// JWT session token configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Session token expiry time in seconds
    pub expires_in: i64,

    /// JWT issuer claim
    pub issuer: String,

    /// JWT audience claim
    pub audience: String,

    /// Clock skew tolerance in seconds when validating `exp` and `nbf`
    #[serde(default)]
    pub leeway: u64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            expires_in: 90 * 86400, // 90 days
            issuer: String::from("tourbook"),
            audience: String::from("tourbook-api"),
            leeway: 0,
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set token expiry in days
    pub fn with_expiry_days(mut self, days: i64) -> Self {
        self.expires_in = days * 86400;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }

    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    pub(crate) fn with_env_overrides(self) -> Self {
        Self {
            secret: std::env::var("JWT_SECRET").unwrap_or(self.secret),
            expires_in: env_or("JWT_EXPIRES_IN_SECONDS", self.expires_in),
            issuer: std::env::var("JWT_ISSUER").unwrap_or(self.issuer),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or(self.audience),
            leeway: env_or("JWT_LEEWAY_SECONDS", self.leeway),
        }
    }
}

/// Session cookie configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CookieConfig {
    /// Cookie carrying the session token
    pub name: String,

    /// Cookie lifetime in days
    pub expires_in_days: i64,

    /// Always mark the cookie `Secure`, regardless of request scheme
    #[serde(default)]
    pub force_secure: bool,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: String::from("jwt"),
            expires_in_days: 90,
            force_secure: false,
        }
    }
}

impl CookieConfig {
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    pub(crate) fn with_env_overrides(self) -> Self {
        Self {
            expires_in_days: env_or("JWT_COOKIE_EXPIRES_IN", self.expires_in_days),
            force_secure: env_or("COOKIE_FORCE_SECURE", self.force_secure),
            ..self
        }
    }
}

/// Password hashing and reset policy
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PasswordConfig {
    /// bcrypt work factor
    pub bcrypt_cost: u32,

    /// Minimum accepted password length
    pub min_length: usize,

    /// Lifetime of a password reset token in minutes
    pub reset_token_ttl_minutes: i64,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: 12,
            min_length: 8,
            reset_token_ttl_minutes: 10,
        }
    }
}

impl PasswordConfig {
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    pub(crate) fn with_env_overrides(self) -> Self {
        Self {
            bcrypt_cost: env_or("BCRYPT_COST", self.bcrypt_cost),
            min_length: env_or("PASSWORD_MIN_LENGTH", self.min_length),
            reset_token_ttl_minutes: env_or("PASSWORD_RESET_TTL_MINUTES", self.reset_token_ttl_minutes),
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Session cookie configuration
    #[serde(default)]
    pub cookie: CookieConfig,

    /// Password policy
    #[serde(default)]
    pub password: PasswordConfig,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    pub(crate) fn with_env_overrides(self) -> Self {
        Self {
            jwt: self.jwt.with_env_overrides(),
            cookie: self.cookie.with_env_overrides(),
            password: self.password.with_env_overrides(),
        }
    }
}
