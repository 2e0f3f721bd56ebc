//! Session authentication middleware for protecting API endpoints.
//!
//! The token is taken from the `Authorization: Bearer` header, falling back to
//! the session cookie. It is resolved to a user by the [`Authenticator`]
//! registered as `web::Data<dyn Authenticator>`.
//!
//! The middleware works in two modes:
//! 1. Required: any failure ends the request with a 401
//! 2. Optional: failures are swallowed and the request continues anonymously

use actix_web::{
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};
use tb_core::domain::entities::user::User;
use tb_core::errors::{AuthError, DomainError, UnauthenticatedReason};
use tb_core::services::auth::Authenticator;

use crate::handlers::ApiError;

/// The authenticated user, injected by [`JwtAuth`]
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// The user behind an optional session, if any
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<User>);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Required,
    Optional,
}

/// Session authentication middleware factory
pub struct JwtAuth {
    cookie_name: Rc<str>,
    mode: Mode,
}

impl JwtAuth {
    /// Reject requests without a valid session
    pub fn required(cookie_name: &str) -> Self {
        Self {
            cookie_name: Rc::from(cookie_name),
            mode: Mode::Required,
        }
    }

    /// Attach the user when a valid session is presented, never reject
    pub fn optional(cookie_name: &str) -> Self {
        Self {
            cookie_name: Rc::from(cookie_name),
            mode: Mode::Optional,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            cookie_name: Rc::clone(&self.cookie_name),
            mode: self.mode,
        }))
    }
}

/// Session authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    cookie_name: Rc<str>,
    mode: Mode,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let mode = self.mode;
        let token = extract_token(req.request(), &self.cookie_name);
        let authenticator = req.app_data::<web::Data<dyn Authenticator>>().cloned();

        Box::pin(async move {
            let authenticator = match authenticator {
                Some(authenticator) => authenticator,
                None => {
                    let error = ApiError(DomainError::internal("Authenticator is not registered"));
                    return Err(Error::from(error));
                }
            };

            match mode {
                Mode::Required => match authenticator.authenticate(token.as_deref()).await {
                    Ok(user) => {
                        req.extensions_mut().insert(CurrentUser(user));
                    }
                    Err(e) => return Err(Error::from(ApiError(e))),
                },
                Mode::Optional => {
                    if let Some(user) = authenticator.try_authenticate(token.as_deref()).await {
                        req.extensions_mut().insert(CurrentUser(user));
                    }
                }
            }

            service.call(req).await
        })
    }
}

/// Session token of a request: bearer header first, then the cookie
pub fn extract_token(req: &HttpRequest, cookie_name: &str) -> Option<String> {
    let bearer = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string());

    bearer.or_else(|| req.cookie(cookie_name).map(|c| c.value().to_string()))
}

/// Extractor for required authentication
impl FromRequest for CurrentUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| {
                ApiError(AuthError::Unauthenticated(UnauthenticatedReason::MissingToken).into())
            });

        ready(result)
    }
}

/// Extractor for optional authentication
impl FromRequest for MaybeUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let user = req.extensions().get::<CurrentUser>().map(|c| c.0.clone());
        ready(Ok(MaybeUser(user)))
    }
}
