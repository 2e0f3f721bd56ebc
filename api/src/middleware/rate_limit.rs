//! Rate limiting middleware for API endpoints
//!
//! Every request under the wrapped scope spends one unit of the client's
//! budget. Clients are told apart by their address as reported by
//! [`ConnectionInfo::realip_remote_addr`](actix_web::dev::ConnectionInfo::realip_remote_addr),
//! which honors `Forwarded` and `X-Forwarded-For` set by a reverse proxy.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
    time::Duration,
};
use tb_core::services::rate_limit::RateLimiter;
use tb_shared::config::RateLimitConfig;

use crate::handlers::ApiError;

/// Rate limiter middleware factory
#[derive(Clone)]
pub struct RateLimit {
    limiter: Arc<dyn RateLimiter>,
    max_requests: u32,
    window: Duration,
    enabled: bool,
}

impl RateLimit {
    pub fn new(limiter: Arc<dyn RateLimiter>, config: &RateLimitConfig) -> Self {
        Self {
            limiter,
            max_requests: config.max_requests,
            window: config.window(),
            enabled: config.enabled,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimitMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddleware {
            service: Rc::new(service),
            settings: self.clone(),
        }))
    }
}

/// Rate limiter middleware service
pub struct RateLimitMiddleware<S> {
    service: Rc<S>,
    settings: RateLimit,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddleware<S>
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
        let settings = self.settings.clone();

        Box::pin(async move {
            if settings.enabled {
                let client = client_key(&req);
                if let Err(e) = settings
                    .limiter
                    .check_and_record(&client, settings.max_requests, settings.window)
                    .await
                {
                    return Err(Error::from(ApiError(e)));
                }
            }

            service.call(req).await
        })
    }
}

/// Address the request budget is charged to
fn client_key(req: &ServiceRequest) -> String {
    req.connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string()
}
