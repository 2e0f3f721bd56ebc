use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use tb_core::repositories::{ReviewRepository, TourRepository, UserRepository};
use tb_core::services::mail::Mailer;

use crate::app::AppState;
use crate::dto::users::{LoginRequest, MaybeUserData, SignupRequest, UserData};
use crate::dto::{DataResponse, MessageResponse};
use crate::handlers::ApiError;
use crate::middleware::{CurrentUser, MaybeUser};

use super::{logout_cookie, send_session};

/// Handler for POST /api/v1/users/signup
///
/// Creates a `user` account, sends the welcome mail and logs the user in.
///
/// ## Errors
/// - 400 Bad Request: missing name, invalid email, password too short or not confirmed
/// - 409 Conflict: email already registered
pub async fn signup<U, M, R, T>(
    req: HttpRequest,
    state: web::Data<AppState<U, M, R, T>>,
    body: web::Json<SignupRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    M: Mailer + 'static,
    R: ReviewRepository + 'static,
    T: TourRepository + 'static,
{
    body.validate()?;
    let body = body.into_inner();

    let welcome_url = format!("{}/me", state.public_base_url);
    let session = state
        .auth_service
        .signup(
            &body.name,
            &body.email,
            &body.password,
            &body.password_confirm,
            &welcome_url,
        )
        .await?;

    Ok(send_session(&req, &state.cookie, StatusCode::CREATED, session))
}

/// Handler for POST /api/v1/users/login
///
/// ## Errors
/// - 400 Bad Request: email or password missing
/// - 401 Unauthorized: unknown email or wrong password (same message for both)
pub async fn login<U, M, R, T>(
    req: HttpRequest,
    state: web::Data<AppState<U, M, R, T>>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    M: Mailer + 'static,
    R: ReviewRepository + 'static,
    T: TourRepository + 'static,
{
    let session = state.auth_service.login(&body.email, &body.password).await?;
    Ok(send_session(&req, &state.cookie, StatusCode::OK, session))
}

/// Handler for GET /api/v1/users/logout
///
/// Sessions are stateless, so logging out only replaces the cookie.
pub async fn logout<U, M, R, T>(
    req: HttpRequest,
    state: web::Data<AppState<U, M, R, T>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    M: Mailer + 'static,
    R: ReviewRepository + 'static,
    T: TourRepository + 'static,
{
    HttpResponse::Ok()
        .cookie(logout_cookie(&req, &state.cookie))
        .json(MessageResponse::empty())
}

/// Handler for GET /api/v1/users/me
pub async fn me(CurrentUser(user): CurrentUser) -> HttpResponse {
    HttpResponse::Ok().json(DataResponse::new(UserData { user }))
}

/// Handler for GET /api/v1/users/session
///
/// Lenient variant of `me` for clients that only adapt to a logged-in user.
/// Answers `user: null` instead of failing.
pub async fn session(MaybeUser(user): MaybeUser) -> HttpResponse {
    HttpResponse::Ok().json(DataResponse::new(MaybeUserData { user }))
}
