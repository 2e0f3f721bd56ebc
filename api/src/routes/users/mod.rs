//! Account and session handlers
//!
//! Every handler that starts a session answers with the token in the body
//! and in an HttpOnly cookie.

mod password;
mod session;

pub use password::{forgot_password, reset_password, update_my_password};
pub use session::{login, logout, me, session, signup};

use actix_web::cookie::{time::Duration as CookieDuration, Cookie};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use tb_core::domain::value_objects::AuthSession;
use tb_shared::config::CookieConfig;

use crate::dto::users::SessionResponse;

/// Seconds the logout placeholder cookie lives
const LOGOUT_COOKIE_SECONDS: i64 = 10;

/// Cookies are marked Secure when the request reached us over TLS,
/// directly or through a proxy that says so
fn is_secure(req: &HttpRequest, config: &CookieConfig) -> bool {
    if config.force_secure || req.connection_info().scheme() == "https" {
        return true;
    }

    req.headers()
        .get("x-forwarded-proto")
        .and_then(|value| value.to_str().ok())
        .map(|value| value.eq_ignore_ascii_case("https"))
        .unwrap_or(false)
}

fn build_cookie(
    req: &HttpRequest,
    config: &CookieConfig,
    value: String,
    max_age: CookieDuration,
) -> Cookie<'static> {
    Cookie::build(config.name.clone(), value)
        .path("/")
        .http_only(true)
        .secure(is_secure(req, config))
        .max_age(max_age)
        .finish()
}

/// Session cookie carrying `token`
pub(crate) fn session_cookie(req: &HttpRequest, config: &CookieConfig, token: String) -> Cookie<'static> {
    build_cookie(req, config, token, CookieDuration::days(config.expires_in_days))
}

/// Short-lived cookie that replaces the session on logout
pub(crate) fn logout_cookie(req: &HttpRequest, config: &CookieConfig) -> Cookie<'static> {
    build_cookie(
        req,
        config,
        tb_core::services::auth::LOGGED_OUT_PLACEHOLDER.to_string(),
        CookieDuration::seconds(LOGOUT_COOKIE_SECONDS),
    )
}

/// Response for a freshly started session
pub(crate) fn send_session(
    req: &HttpRequest,
    config: &CookieConfig,
    status: StatusCode,
    session: AuthSession,
) -> HttpResponse {
    let cookie = session_cookie(req, config, session.token.clone());
    HttpResponse::build(status)
        .cookie(cookie)
        .json(SessionResponse::from(session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_cookie_not_secure_over_plain_http() {
        let req = TestRequest::default().to_http_request();
        let cookie = session_cookie(&req, &CookieConfig::default(), "tok".into());

        assert_eq!(cookie.name(), "jwt");
        assert_eq!(cookie.http_only(), Some(true));
        assert_ne!(cookie.secure(), Some(true));
        assert_eq!(cookie.max_age(), Some(CookieDuration::days(90)));
    }

    #[test]
    fn test_cookie_secure_behind_tls_proxy() {
        let req = TestRequest::default()
            .insert_header(("x-forwarded-proto", "https"))
            .to_http_request();
        let cookie = session_cookie(&req, &CookieConfig::default(), "tok".into());
        assert_eq!(cookie.secure(), Some(true));
    }

    #[test]
    fn test_logout_cookie_is_placeholder() {
        let req = TestRequest::default().to_http_request();
        let cookie = logout_cookie(&req, &CookieConfig::default());
        assert_eq!(cookie.value(), "loggedout");
        assert_eq!(cookie.max_age(), Some(CookieDuration::seconds(10)));
    }
}
