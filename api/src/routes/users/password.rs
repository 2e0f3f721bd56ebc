use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use tb_core::repositories::{ReviewRepository, TourRepository, UserRepository};
use tb_core::services::mail::Mailer;

use crate::app::AppState;
use crate::dto::users::{ForgotPasswordRequest, ResetPasswordRequest, UpdatePasswordRequest};
use crate::dto::MessageResponse;
use crate::handlers::ApiError;
use crate::middleware::CurrentUser;

use super::send_session;

/// Path of the reset endpoint, completed with the raw token in the mail
pub const RESET_PASSWORD_PATH: &str = "/api/v1/users/resetPassword";

/// Handler for POST /api/v1/users/forgotPassword
///
/// Mails a single-use reset link. The token itself never appears in the response.
///
/// ## Errors
/// - 404 Not Found: no account with this email
/// - 500 Internal Server Error: the mail could not be sent, nothing is pending
pub async fn forgot_password<U, M, R, T>(
    state: web::Data<AppState<U, M, R, T>>,
    body: web::Json<ForgotPasswordRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    M: Mailer + 'static,
    R: ReviewRepository + 'static,
    T: TourRepository + 'static,
{
    let reset_url_base = format!("{}{}", state.public_base_url, RESET_PASSWORD_PATH);
    state
        .auth_service
        .request_password_reset(&body.email, &reset_url_base)
        .await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Token sent to email!")))
}

/// Handler for PATCH /api/v1/users/resetPassword/{token}
///
/// ## Errors
/// - 400 Bad Request: token unknown, used or expired; or the new password is rejected
pub async fn reset_password<U, M, R, T>(
    req: HttpRequest,
    state: web::Data<AppState<U, M, R, T>>,
    token: web::Path<String>,
    body: web::Json<ResetPasswordRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    M: Mailer + 'static,
    R: ReviewRepository + 'static,
    T: TourRepository + 'static,
{
    body.validate()?;

    let session = state
        .auth_service
        .reset_password(&token, &body.password, &body.password_confirm)
        .await?;

    Ok(send_session(&req, &state.cookie, StatusCode::OK, session))
}

/// Handler for PATCH /api/v1/users/updateMyPassword
///
/// ## Errors
/// - 401 Unauthorized: not logged in, or the current password is wrong
/// - 400 Bad Request: the new password is rejected
pub async fn update_my_password<U, M, R, T>(
    req: HttpRequest,
    state: web::Data<AppState<U, M, R, T>>,
    CurrentUser(user): CurrentUser,
    body: web::Json<UpdatePasswordRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    M: Mailer + 'static,
    R: ReviewRepository + 'static,
    T: TourRepository + 'static,
{
    body.validate()?;

    let session = state
        .auth_service
        .change_password(
            user.id,
            &body.password_current,
            &body.password,
            &body.password_confirm,
        )
        .await?;

    Ok(send_session(&req, &state.cookie, StatusCode::OK, session))
}
