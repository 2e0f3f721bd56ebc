//! Main token service implementation

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{Claims, IssuedToken};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Service for signing and verifying session tokens
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_audience(&[config.audience.as_str()]);
        validation.leeway = config.leeway;
        validation.validate_exp = true;
        validation.validate_nbf = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Signs a new session token for `user`
    ///
    /// # Returns
    ///
    /// * `Ok(IssuedToken)` - The encoded token and its lifetime in seconds
    /// * `Err(TokenError::TokenGenerationFailed)` - Signing failed
    pub fn issue(&self, user: &User) -> Result<IssuedToken, DomainError> {
        let claims = Claims::new_session(
            user.id,
            self.config.expires_in_seconds,
            self.config.issuer.as_str(),
            self.config.audience.as_str(),
        );
        let token = self.encode_jwt(&claims)?;

        Ok(IssuedToken {
            token,
            expires_in: self.config.expires_in_seconds,
        })
    }

    /// Verifies signature, issuer, audience and time claims of a token
    ///
    /// This does not look the user up. See `AuthService::authenticate` for that.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                ErrorKind::ImmatureSignature => TokenError::TokenNotYetValid,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                ErrorKind::InvalidIssuer | ErrorKind::InvalidAudience | ErrorKind::MissingRequiredClaim(_) => {
                    TokenError::InvalidClaims
                }
                _ => TokenError::InvalidTokenFormat,
            })?;

        Ok(token_data.claims)
    }

    pub(crate) fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }
}
