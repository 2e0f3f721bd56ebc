//! Main authentication service implementation

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::Arc;
use tb_shared::utils::{is_valid_email, normalize_email, password_long_enough};
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::domain::value_objects::AuthSession;
use crate::errors::{AuthError, DomainError, DomainResult, UnauthenticatedReason, ValidationError};
use crate::repositories::UserRepository;
use crate::services::mail::{Mailer, Recipient};
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;
use super::password::{hash_password, verify_password};
use super::reset_token::{generate_reset_token, hash_reset_token};

/// Cookie value written on logout. It is never a valid token.
pub const LOGGED_OUT_PLACEHOLDER: &str = "loggedout";

/// Resolves a presented session token to a user
///
/// This is the seam the HTTP middleware depends on, so it can hold the
/// service as a trait object without knowing its repository types.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Strict check used by protected routes
    async fn authenticate(&self, token: Option<&str>) -> DomainResult<User>;

    /// Lenient check used by pages that merely adapt to a logged-in user.
    /// Never fails.
    async fn try_authenticate(&self, token: Option<&str>) -> Option<User>;
}

/// Authentication service for the credential and session flows
pub struct AuthService<U, M>
where
    U: UserRepository,
    M: Mailer,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Outbound mail for welcome and reset messages
    mailer: Arc<M>,
    /// Token service for JWT management
    token_service: Arc<TokenService>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, M> AuthService<U, M>
where
    U: UserRepository,
    M: Mailer,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        mailer: Arc<M>,
        token_service: Arc<TokenService>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            mailer,
            token_service,
            config,
        }
    }

    /// Register a new account with the `user` role and log it in
    ///
    /// The welcome mail is best effort: a delivery failure is logged and the
    /// signup still succeeds.
    ///
    /// # Returns
    ///
    /// * `Ok(AuthSession)` - Token for the new user
    /// * `Err(ValidationError)` - Name, email or password rejected
    /// * `Err(AuthError::UserAlreadyExists)` - Email already registered
    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
        password_confirm: &str,
        welcome_url: &str,
    ) -> DomainResult<AuthSession> {
        if name.trim().is_empty() {
            return Err(ValidationError::required("your name").into());
        }
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        self.validate_new_password(password, password_confirm)?;

        let password_hash = hash_password(password, self.config.bcrypt_cost).await?;
        let user = self
            .user_repository
            .create(User::new(name, email, password_hash))
            .await?;

        tracing::info!(user_id = %user.id, "New user registered");

        if let Err(e) = self.mailer.send_welcome(&Recipient::from(&user), welcome_url).await {
            tracing::warn!(user_id = %user.id, error = %e, "Failed to send welcome email");
        }

        self.start_session(user)
    }

    /// Log in with email and password
    ///
    /// Unknown email and wrong password produce the same error.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthSession> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(ValidationError::required("email and password").into());
        }

        let user = self
            .user_repository
            .find_by_email(&normalize_email(email))
            .await?;

        let verified = match &user {
            Some(user) => verify_password(password, &user.password_hash).await?,
            None => false,
        };
        let user = match user {
            Some(user) if verified => user,
            _ => {
                tracing::warn!("Login failed: incorrect email or password");
                return Err(AuthError::InvalidCredential.into());
            }
        };

        self.start_session(user)
    }

    /// Resolve a session token to its user
    ///
    /// Checks, in order: presence, signature and expiry, that the user still
    /// exists, and that the password was not changed after the token was issued.
    pub async fn authenticate(&self, token: Option<&str>) -> DomainResult<User> {
        let token = match token.map(str::trim) {
            Some(t) if !t.is_empty() => t,
            _ => return Err(unauthenticated(UnauthenticatedReason::MissingToken)),
        };

        let claims = self
            .token_service
            .verify(token)
            .map_err(|e| unauthenticated(e.into()))?;

        let user_id = claims
            .user_id()
            .map_err(|_| unauthenticated(UnauthenticatedReason::InvalidToken))?;

        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| unauthenticated(UnauthenticatedReason::UserNoLongerExists))?;

        if user.changed_password_after(claims.iat_ms) {
            return Err(unauthenticated(UnauthenticatedReason::PasswordChanged));
        }

        Ok(user)
    }

    /// Like [`authenticate`](Self::authenticate) but swallows every failure
    pub async fn try_authenticate(&self, token: Option<&str>) -> Option<User> {
        match token {
            Some(LOGGED_OUT_PLACEHOLDER) | None => None,
            Some(token) => self.authenticate(Some(token)).await.ok(),
        }
    }

    /// Start a password reset for the account registered under `email`
    ///
    /// A fresh token replaces any pending one. Its digest and expiry are stored,
    /// and the raw token is mailed as `{reset_url_base}/{token}`. If the mail
    /// cannot be delivered, the pending reset is cleared again.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The raw token. It must not leave the process other than by mail
    /// * `Err(AuthError::UserNotFound)` - No account with this email
    /// * `Err(AuthError::EmailDeliveryFailure)` - Mail failed, nothing is pending
    /// * `Err(DomainError::Internal)` - Mail failed and the pending reset could not be cleared
    pub async fn request_password_reset(&self, email: &str, reset_url_base: &str) -> DomainResult<String> {
        let mut user = self
            .user_repository
            .find_by_email(&normalize_email(email))
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let (raw_token, token_hash) = generate_reset_token();
        let ttl = self.config.reset_token_ttl_minutes;
        user.set_password_reset(token_hash, Utc::now() + Duration::minutes(ttl));
        let mut user = self.user_repository.update(user).await?;

        let reset_url = format!("{}/{}", reset_url_base.trim_end_matches('/'), raw_token);
        if let Err(e) = self
            .mailer
            .send_password_reset(&Recipient::from(&user), &reset_url, ttl)
            .await
        {
            tracing::error!(user_id = %user.id, error = %e, "Failed to send password reset email, clearing pending reset");
            user.clear_password_reset();
            if let Err(rollback) = self.user_repository.update(user).await {
                tracing::error!(error = %rollback, "Failed to clear pending password reset");
                return Err(DomainError::internal(format!(
                    "password reset mail failed and the pending reset could not be cleared: {}",
                    rollback
                )));
            }
            return Err(AuthError::EmailDeliveryFailure.into());
        }

        tracing::info!(user_id = %user.id, "Password reset requested");
        Ok(raw_token)
    }

    /// Consume a reset token and set a new password
    ///
    /// The token is single use: the pending reset is cleared on success.
    pub async fn reset_password(
        &self,
        raw_token: &str,
        password: &str,
        password_confirm: &str,
    ) -> DomainResult<AuthSession> {
        let mut user = self
            .user_repository
            .find_by_reset_token(&hash_reset_token(raw_token), Utc::now())
            .await?
            .ok_or(AuthError::ResetTokenInvalidOrExpired)?;

        self.validate_new_password(password, password_confirm)?;

        let password_hash = hash_password(password, self.config.bcrypt_cost).await?;
        user.set_password(password_hash);
        user.clear_password_reset();
        let user = self.user_repository.update(user).await?;

        tracing::info!(user_id = %user.id, "Password reset completed");
        self.start_session(user)
    }

    /// Change the password of a logged-in user after re-checking the current one
    ///
    /// Tokens issued before the change stop authenticating. The returned
    /// session replaces them.
    pub async fn change_password(
        &self,
        user_id: Uuid,
        current_password: &str,
        password: &str,
        password_confirm: &str,
    ) -> DomainResult<AuthSession> {
        let mut user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !verify_password(current_password, &user.password_hash).await? {
            tracing::warn!(user_id = %user.id, "Password change rejected: wrong current password");
            return Err(AuthError::IncorrectCurrentPassword.into());
        }

        self.validate_new_password(password, password_confirm)?;

        let password_hash = hash_password(password, self.config.bcrypt_cost).await?;
        user.set_password(password_hash);
        let user = self.user_repository.update(user).await?;

        tracing::info!(user_id = %user.id, "Password changed");
        self.start_session(user)
    }

    fn validate_new_password(&self, password: &str, password_confirm: &str) -> Result<(), ValidationError> {
        if !password_long_enough(password, self.config.min_password_length) {
            return Err(ValidationError::PasswordTooShort {
                min: self.config.min_password_length,
            });
        }
        if password != password_confirm {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(())
    }

    fn start_session(&self, user: User) -> DomainResult<AuthSession> {
        let issued = self.token_service.issue(&user)?;
        Ok(AuthSession::new(issued, user))
    }
}

#[async_trait]
impl<U, M> Authenticator for AuthService<U, M>
where
    U: UserRepository,
    M: Mailer,
{
    async fn authenticate(&self, token: Option<&str>) -> DomainResult<User> {
        AuthService::authenticate(self, token).await
    }

    async fn try_authenticate(&self, token: Option<&str>) -> Option<User> {
        AuthService::try_authenticate(self, token).await
    }
}

fn unauthenticated(reason: UnauthenticatedReason) -> DomainError {
    AuthError::Unauthenticated(reason).into()
}
