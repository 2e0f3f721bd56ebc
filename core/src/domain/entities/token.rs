//! Token entities for JWT-based session authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT issuer
pub const JWT_ISSUER: &str = "tourbook";

/// JWT audience
pub const JWT_AUDIENCE: &str = "tourbook-api";

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Issue instant in milliseconds, compared against password changes
    pub iat_ms: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates new session claims valid for `ttl_seconds` from now
    pub fn new_session(
        user_id: Uuid,
        ttl_seconds: i64,
        issuer: impl Into<String>,
        audience: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(ttl_seconds);

        Self {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            iat_ms: now.timestamp_millis(),
            exp: expiry.timestamp(),
            nbf: now.timestamp(),
            iss: issuer.into(),
            aud: audience.into(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Gets the user ID from the claims
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// A freshly signed session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedToken {
    /// Encoded JWT
    pub token: String,

    /// Lifetime in seconds
    pub expires_in: i64,
}
