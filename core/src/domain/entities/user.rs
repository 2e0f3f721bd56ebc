//! User entity representing a registered account in the Tourbook system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Photo assigned to accounts that never uploaded one
pub const DEFAULT_PHOTO: &str = "default.jpg";

/// Role of a user, used for route authorization
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserRole {
    /// A regular customer who books tours and writes reviews
    #[default]
    User,
    /// A tour guide
    Guide,
    /// A lead guide
    LeadGuide,
    /// Site administrator
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Guide => "guide",
            UserRole::LeadGuide => "lead-guide",
            UserRole::Admin => "admin",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(UserRole::User),
            "guide" => Ok(UserRole::Guide),
            "lead-guide" => Ok(UserRole::LeadGuide),
            "admin" => Ok(UserRole::Admin),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// User entity representing a registered account
///
/// Credential fields are never serialized, so a `User` can be embedded in an
/// HTTP response body as is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Email address, stored lower-cased
    pub email: String,

    /// Profile photo file name
    pub photo: String,

    pub role: UserRole,

    /// bcrypt hash of the current password
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    /// When the password was last changed, `None` if never changed since signup
    #[serde(skip_serializing, default)]
    pub password_changed_at: Option<DateTime<Utc>>,

    /// SHA-256 hex digest of the pending reset token
    #[serde(skip_serializing, default)]
    pub password_reset_token: Option<String>,

    /// Expiry of the pending reset token
    #[serde(skip_serializing, default)]
    pub password_reset_expires: Option<DateTime<Utc>>,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user with the default role and photo
    ///
    /// `email` is normalized here; callers validate it beforehand.
    pub fn new(name: impl Into<String>, email: &str, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into().trim().to_string(),
            email: tb_shared::utils::normalize_email(email),
            photo: DEFAULT_PHOTO.to_string(),
            role: UserRole::User,
            password_hash,
            password_changed_at: None,
            password_reset_token: None,
            password_reset_expires: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the password hash and records the exact change instant
    pub fn set_password(&mut self, password_hash: String) {
        let now = Utc::now();
        self.password_hash = password_hash;
        self.password_changed_at = Some(now);
        self.updated_at = now;
    }

    /// Whether the password changed after a token issued at `issued_at_ms`
    /// (milliseconds since the epoch)
    pub fn changed_password_after(&self, issued_at_ms: i64) -> bool {
        match self.password_changed_at {
            Some(changed_at) => changed_at.timestamp_millis() > issued_at_ms,
            None => false,
        }
    }

    /// Stores a pending reset token digest and its expiry together
    pub fn set_password_reset(&mut self, token_hash: String, expires_at: DateTime<Utc>) {
        self.password_reset_token = Some(token_hash);
        self.password_reset_expires = Some(expires_at);
        self.updated_at = Utc::now();
    }

    /// Drops any pending reset token
    pub fn clear_password_reset(&mut self) {
        self.password_reset_token = None;
        self.password_reset_expires = None;
        self.updated_at = Utc::now();
    }

    /// Whether `token_hash` matches the pending reset and it has not expired at `now`
    pub fn has_valid_reset(&self, token_hash: &str, now: DateTime<Utc>) -> bool {
        match (&self.password_reset_token, self.password_reset_expires) {
            (Some(stored), Some(expires)) => stored == token_hash && expires > now,
            _ => false,
        }
    }

    pub fn has_role(&self, roles: &[UserRole]) -> bool {
        roles.contains(&self.role)
    }

    /// First word of the display name, used in greetings
    pub fn first_name(&self) -> &str {
        tb_shared::utils::first_name(&self.name)
    }
}
