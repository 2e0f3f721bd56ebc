//! Application state and factory
//!
//! `create_app` is generic over the repository and mailer types so the same
//! routing runs against MySQL in production and the in-memory mocks in tests.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    error::{InternalError, JsonPayloadError, PathError},
    http::StatusCode,
    middleware::DefaultHeaders,
    web, App, HttpRequest,
};
use tracing_actix_web::TracingLogger;

use tb_core::errors::DomainError;
use tb_core::repositories::{ReviewRepository, TourRepository, UserRepository};
use tb_core::services::auth::{AuthService, Authenticator};
use tb_core::services::mail::Mailer;
use tb_core::services::rate_limit::{InMemoryRateLimiter, RateLimiter};
use tb_core::services::review::ReviewService;
use tb_shared::config::{AppConfig, CookieConfig, RateLimitConfig};
use tb_shared::error_codes;

use crate::handlers::{error_body, ApiError};
use crate::middleware::{JwtAuth, RateLimit};
use crate::routes::{health, reviews, users};

/// Shared services and settings handed to every handler
pub struct AppState<U, M, R, T>
where
    U: UserRepository,
    M: Mailer,
    R: ReviewRepository,
    T: TourRepository,
{
    pub auth_service: Arc<AuthService<U, M>>,
    pub review_service: Arc<ReviewService<R, T>>,
    pub cookie: CookieConfig,
    /// Origin used in links sent by mail, without trailing slash
    pub public_base_url: String,
    pub max_payload_size: usize,
    /// Include parser details in 400 responses
    pub expose_error_details: bool,
    /// Request budgets, shared by every worker
    pub rate_limiter: Arc<dyn RateLimiter>,
    pub rate_limit: RateLimitConfig,
}

impl<U, M, R, T> AppState<U, M, R, T>
where
    U: UserRepository,
    M: Mailer,
    R: ReviewRepository,
    T: TourRepository,
{
    pub fn new(
        auth_service: Arc<AuthService<U, M>>,
        review_service: Arc<ReviewService<R, T>>,
        config: &AppConfig,
    ) -> Self {
        Self {
            auth_service,
            review_service,
            cookie: config.auth.cookie.clone(),
            public_base_url: config.server.public_base_url.clone(),
            max_payload_size: config.server.max_payload_size,
            expose_error_details: config.environment.exposes_error_details(),
            rate_limiter: Arc::new(InMemoryRateLimiter::new()),
            rate_limit: config.rate_limit.clone(),
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<U, M, R, T>(
    state: web::Data<AppState<U, M, R, T>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    M: Mailer + 'static,
    R: ReviewRepository + 'static,
    T: TourRepository + 'static,
{
    let authenticator: Arc<dyn Authenticator> = state.auth_service.clone();
    let cookie_name = state.cookie.name.clone();

    let expose_error_details = state.expose_error_details;
    let json_config = web::JsonConfig::default()
        .limit(state.max_payload_size)
        .error_handler(move |err, _req| json_error(err, expose_error_details));
    let path_config = web::PathConfig::default().error_handler(path_error);
    let rate_limit = RateLimit::new(Arc::clone(&state.rate_limiter), &state.rate_limit);

    App::new()
        .app_data(state)
        .app_data(web::Data::from(authenticator))
        .app_data(json_config)
        .app_data(path_config)
        .wrap(security_headers())
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api/v1")
                .wrap(rate_limit)
                .service(
                    web::scope("/users")
                        .route("/signup", web::post().to(users::signup::<U, M, R, T>))
                        .route("/login", web::post().to(users::login::<U, M, R, T>))
                        .route("/logout", web::get().to(users::logout::<U, M, R, T>))
                        .route(
                            "/forgotPassword",
                            web::post().to(users::forgot_password::<U, M, R, T>),
                        )
                        .route(
                            "/resetPassword/{token}",
                            web::patch().to(users::reset_password::<U, M, R, T>),
                        )
                        .service(
                            web::resource("/updateMyPassword")
                                .wrap(JwtAuth::required(&cookie_name))
                                .route(web::patch().to(users::update_my_password::<U, M, R, T>)),
                        )
                        .service(
                            web::resource("/me")
                                .wrap(JwtAuth::required(&cookie_name))
                                .route(web::get().to(users::me)),
                        )
                        .service(
                            web::resource("/session")
                                .wrap(JwtAuth::optional(&cookie_name))
                                .route(web::get().to(users::session)),
                        ),
                )
                .service(
                    web::scope("/reviews")
                        .wrap(JwtAuth::required(&cookie_name))
                        .service(
                            web::resource("")
                                .route(web::get().to(reviews::list_reviews::<U, M, R, T>))
                                .route(web::post().to(reviews::create_review::<U, M, R, T>)),
                        )
                        .service(
                            web::resource("/{id}")
                                .route(web::get().to(reviews::get_review::<U, M, R, T>))
                                .route(web::patch().to(reviews::update_review::<U, M, R, T>))
                                .route(web::delete().to(reviews::delete_review::<U, M, R, T>)),
                        ),
                )
                .service(
                    web::scope("/tours/{tour_id}/reviews")
                        .wrap(JwtAuth::required(&cookie_name))
                        .service(
                            web::resource("")
                                .route(web::get().to(reviews::list_tour_reviews::<U, M, R, T>))
                                .route(web::post().to(reviews::create_tour_review::<U, M, R, T>)),
                        ),
                ),
        )
        .default_service(web::route().to(health::not_found))
}

fn security_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("X-Content-Type-Options", "nosniff"))
        .add(("X-Frame-Options", "DENY"))
        .add(("Referrer-Policy", "no-referrer"))
}

fn json_error(err: JsonPayloadError, expose_details: bool) -> actix_web::Error {
    let (status, message) = match &err {
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => (
            StatusCode::PAYLOAD_TOO_LARGE,
            "Request body is too large".to_string(),
        ),
        JsonPayloadError::ContentType => (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "Content type must be application/json".to_string(),
        ),
        _ if expose_details => (StatusCode::BAD_REQUEST, format!("Invalid JSON body: {}", err)),
        _ => (StatusCode::BAD_REQUEST, "Invalid JSON body".to_string()),
    };

    let response = error_body(status, error_codes::BAD_REQUEST, message);
    InternalError::from_response(err, response).into()
}

fn path_error(err: PathError, req: &HttpRequest) -> actix_web::Error {
    ApiError(DomainError::Validation {
        message: format!("Invalid id in path {}: {}", req.path(), err),
    })
    .into()
}
