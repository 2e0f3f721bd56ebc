//! Unit tests for the password reset lifecycle

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, UnauthenticatedReason, ValidationError};
use crate::repositories::{MockUserRepository, UserRepository};
use crate::services::auth::{hash_reset_token, AuthService, AuthServiceConfig};
use crate::services::mail::{MockMailer, SentMail};
use crate::services::token::{TokenService, TokenServiceConfig};

use super::fixtures::{harness, PASSWORD, RESET_BASE};

const NEW_PASSWORD: &str = "brand-new-pass";

fn is_invalid_or_expired(result: &Result<impl std::fmt::Debug, DomainError>) -> bool {
    matches!(result, Err(DomainError::Auth(AuthError::ResetTokenInvalidOrExpired)))
}

#[tokio::test]
async fn test_request_stores_digest_and_mails_raw_token() {
    let h = harness();
    let session = h.signup("forgot@example.com").await;

    let raw = h
        .service
        .request_password_reset("Forgot@Example.com", RESET_BASE)
        .await
        .unwrap();
    assert_eq!(raw.len(), 64);

    let user = h.users.find_by_id(session.user.id).await.unwrap().unwrap();
    assert_eq!(user.password_reset_token.as_deref(), Some(hash_reset_token(&raw).as_str()));
    let expires = user.password_reset_expires.unwrap();
    assert!(expires > Utc::now() + Duration::minutes(9));
    assert!(expires <= Utc::now() + Duration::minutes(10));

    assert_eq!(
        h.mailer.last_reset().await,
        Some(SentMail::PasswordReset {
            to: "forgot@example.com".into(),
            url: format!("{}/{}", RESET_BASE, raw),
            expires_in_minutes: 10,
        })
    );
}

#[tokio::test]
async fn test_request_for_unknown_email() {
    let h = harness();
    let result = h.service.request_password_reset("nobody@example.com", RESET_BASE).await;
    assert!(matches!(result, Err(DomainError::Auth(AuthError::UserNotFound))));
}

#[tokio::test]
async fn test_reset_consumes_exactly_once() {
    let h = harness();
    let session = h.signup("once@example.com").await;
    let raw = h
        .service
        .request_password_reset("once@example.com", RESET_BASE)
        .await
        .unwrap();

    let fresh = h.service.reset_password(&raw, NEW_PASSWORD, NEW_PASSWORD).await.unwrap();
    assert_eq!(fresh.user.id, session.user.id);
    assert!(h.service.authenticate(Some(&fresh.token)).await.is_ok());

    let stored = h.users.find_by_id(session.user.id).await.unwrap().unwrap();
    assert!(stored.password_reset_token.is_none());
    assert!(stored.password_reset_expires.is_none());
    assert!(stored.password_changed_at.is_some());

    let second = h.service.reset_password(&raw, "another-pass", "another-pass").await;
    assert!(is_invalid_or_expired(&second));

    assert!(h.service.login("once@example.com", NEW_PASSWORD).await.is_ok());
}

#[tokio::test]
async fn test_reset_invalidates_older_sessions() {
    let h = harness();
    let session = h.signup("older@example.com").await;
    let old_token = h.backdated_token(&session.user, 60);
    let raw = h
        .service
        .request_password_reset("older@example.com", RESET_BASE)
        .await
        .unwrap();
    h.service.reset_password(&raw, NEW_PASSWORD, NEW_PASSWORD).await.unwrap();

    let result = h.service.authenticate(Some(&old_token)).await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::Unauthenticated(UnauthenticatedReason::PasswordChanged)))
    ));
}

#[tokio::test]
async fn test_expired_reset_token() {
    let h = harness();
    let session = h.signup("late@example.com").await;
    let raw = h
        .service
        .request_password_reset("late@example.com", RESET_BASE)
        .await
        .unwrap();

    let mut user = h.users.find_by_id(session.user.id).await.unwrap().unwrap();
    user.password_reset_expires = Some(Utc::now() - Duration::seconds(1));
    h.users.update(user).await.unwrap();

    let result = h.service.reset_password(&raw, NEW_PASSWORD, NEW_PASSWORD).await;
    assert!(is_invalid_or_expired(&result));
    assert!(h.service.login("late@example.com", PASSWORD).await.is_ok());
}

#[tokio::test]
async fn test_new_request_overwrites_pending_token() {
    let h = harness();
    h.signup("twice@example.com").await;
    let first = h
        .service
        .request_password_reset("twice@example.com", RESET_BASE)
        .await
        .unwrap();
    let second = h
        .service
        .request_password_reset("twice@example.com", RESET_BASE)
        .await
        .unwrap();
    assert_ne!(first, second);

    let stale = h.service.reset_password(&first, NEW_PASSWORD, NEW_PASSWORD).await;
    assert!(is_invalid_or_expired(&stale));
    assert!(h.service.reset_password(&second, NEW_PASSWORD, NEW_PASSWORD).await.is_ok());
}

#[tokio::test]
async fn test_reset_validates_new_password() {
    let h = harness();
    h.signup("weak@example.com").await;
    let raw = h
        .service
        .request_password_reset("weak@example.com", RESET_BASE)
        .await
        .unwrap();

    let result = h.service.reset_password(&raw, NEW_PASSWORD, "different-pass").await;
    assert!(matches!(result, Err(DomainError::ValidationErr(ValidationError::PasswordMismatch))));

    // A rejected attempt does not consume the token
    assert!(h.service.reset_password(&raw, NEW_PASSWORD, NEW_PASSWORD).await.is_ok());
}

#[tokio::test]
async fn test_delivery_failure_rolls_back_pending_reset() {
    let h = harness();
    let session = h.signup("bounce@example.com").await;
    h.mailer.set_failing(true);

    let result = h.service.request_password_reset("bounce@example.com", RESET_BASE).await;
    assert!(matches!(result, Err(DomainError::Auth(AuthError::EmailDeliveryFailure))));

    let user = h.users.find_by_id(session.user.id).await.unwrap().unwrap();
    assert!(user.password_reset_token.is_none());
    assert!(user.password_reset_expires.is_none());
    assert!(h.mailer.last_reset().await.is_none());
}

#[tokio::test]
async fn test_failed_delivery_voids_earlier_token() {
    let h = harness();
    h.signup("lost@example.com").await;

    let raw = h
        .service
        .request_password_reset("lost@example.com", RESET_BASE)
        .await
        .unwrap();
    h.mailer.set_failing(true);
    let failed = h.service.request_password_reset("lost@example.com", RESET_BASE).await;
    assert!(failed.is_err());

    let result = h.service.reset_password(&raw, NEW_PASSWORD, NEW_PASSWORD).await;
    assert!(is_invalid_or_expired(&result));
}

/// Stores pending resets but refuses every update that clears one
struct StuckResetRepository(MockUserRepository);

#[async_trait]
impl UserRepository for StuckResetRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        self.0.find_by_id(id).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.0.find_by_email(email).await
    }

    async fn find_by_reset_token(&self, token_hash: &str, now: DateTime<Utc>) -> Result<Option<User>, DomainError> {
        self.0.find_by_reset_token(token_hash, now).await
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        self.0.create(user).await
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        if user.password_reset_token.is_none() {
            return Err(DomainError::internal("connection lost"));
        }
        self.0.update(user).await
    }
}

#[tokio::test]
async fn test_failed_rollback_is_internal_error() {
    let users = Arc::new(StuckResetRepository(MockUserRepository::new()));
    let mailer = Arc::new(MockMailer::failing());
    let tokens = Arc::new(TokenService::new(TokenServiceConfig {
        jwt_secret: "auth-test-secret".to_string(),
        ..Default::default()
    }));
    let service = AuthService::new(
        users.clone(),
        mailer,
        tokens,
        AuthServiceConfig {
            bcrypt_cost: 4,
            ..Default::default()
        },
    );
    service
        .signup("Stuck Reset", "stuck@example.com", PASSWORD, PASSWORD, "https://tourbook.test/me")
        .await
        .unwrap();

    let result = service.request_password_reset("stuck@example.com", RESET_BASE).await;
    match result {
        Err(e @ DomainError::Internal { .. }) => assert!(!e.is_operational()),
        other => panic!("expected internal error, got {:?}", other),
    }

    // The pending reset is still stored, so the failure is not reported as a clean delivery error
    let user = users.find_by_email("stuck@example.com").await.unwrap().unwrap();
    assert!(user.password_reset_token.is_some());
}
