//! Account and session bodies
//!
//! Missing string fields deserialize as empty so the services can answer with
//! their own "Please provide ..." messages.

use serde::{Deserialize, Serialize};
use tb_core::domain::entities::user::User;
use tb_core::domain::value_objects::AuthSession;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[serde(default)]
    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(max = 128, message = "must be at most 128 characters"))]
    pub password: String,

    #[serde(default)]
    pub password_confirm: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForgotPasswordRequest {
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    #[serde(default)]
    #[validate(length(max = 128, message = "must be at most 128 characters"))]
    pub password: String,

    #[serde(default)]
    pub password_confirm: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    #[serde(default)]
    pub password_current: String,

    #[serde(default)]
    #[validate(length(max = 128, message = "must be at most 128 characters"))]
    pub password: String,

    #[serde(default)]
    pub password_confirm: String,
}

#[derive(Debug, Serialize)]
pub struct UserData {
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct MaybeUserData {
    pub user: Option<User>,
}

/// Body returned whenever a session starts
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub status: &'static str,
    pub token: String,
    pub expires_in: i64,
    pub data: UserData,
}

impl From<AuthSession> for SessionResponse {
    fn from(session: AuthSession) -> Self {
        Self {
            status: super::SUCCESS,
            token: session.token,
            expires_in: session.expires_in,
            data: UserData { user: session.user },
        }
    }
}
