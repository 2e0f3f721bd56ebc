//! Configuration for the token service

use jsonwebtoken::Algorithm;
use tb_shared::config::JwtConfig;

use crate::domain::entities::token::{JWT_AUDIENCE, JWT_ISSUER};

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Session token lifetime in seconds
    pub expires_in_seconds: i64,
    pub issuer: String,
    pub audience: String,
    /// Allowed clock skew in seconds
    pub leeway: u64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            algorithm: Algorithm::HS256,
            expires_in_seconds: 90 * 86400,
            issuer: JWT_ISSUER.to_string(),
            audience: JWT_AUDIENCE.to_string(),
            leeway: 0,
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(jwt: &JwtConfig) -> Self {
        Self {
            jwt_secret: jwt.secret.clone(),
            algorithm: Algorithm::HS256,
            expires_in_seconds: jwt.expires_in,
            issuer: jwt.issuer.clone(),
            audience: jwt.audience.clone(),
            leeway: jwt.leeway,
        }
    }
}
