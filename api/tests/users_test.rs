//! Integration tests for the account and session endpoints

mod common;

use actix_web::{cookie::Cookie, test};
use serde_json::json;

use common::{bearer, context, json_body, signup_request, token_of, PASSWORD};
use tb_api::create_app;
use tb_core::services::mail::SentMail;

#[actix_web::test]
async fn test_signup_sets_cookie_and_hides_password() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let resp = test::call_service(
        &app,
        signup_request("Jonas Schmedtmann", "Jonas@Example.com").to_request(),
    )
    .await;
    assert_eq!(resp.status(), 201);

    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == "jwt")
        .expect("session cookie");
    assert_eq!(cookie.http_only(), Some(true));

    let body = json_body(resp).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["user"]["email"], "jonas@example.com");
    assert_eq!(body["data"]["user"]["role"], "user");
    assert!(body["data"]["user"].get("password_hash").is_none());

    let sent = ctx.mailer.sent().await;
    assert!(matches!(&sent[..], [SentMail::Welcome { .. }]));
    assert_eq!(sent[0].url(), "http://127.0.0.1:3000/me");
}

#[actix_web::test]
async fn test_signup_duplicate_email_conflicts() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    token_of(test::call_service(&app, signup_request("Ann", "ann@example.com").to_request()).await).await;
    let resp = test::call_service(&app, signup_request("Ann Two", "ann@example.com").to_request()).await;

    assert_eq!(resp.status(), 409);
    let body = json_body(resp).await;
    assert_eq!(body["status"], "fail");
    assert_eq!(body["error"], "CONFLICT");
}

#[actix_web::test]
async fn test_signup_password_mismatch() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/users/signup")
        .set_json(json!({
            "name": "Lisa",
            "email": "lisa@example.com",
            "password": PASSWORD,
            "passwordConfirm": "different1",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body = json_body(resp).await;
    assert_eq!(body["message"], "Passwords are not the same");
    assert!(ctx.users.is_empty().await);
}

#[actix_web::test]
async fn test_login_same_error_for_unknown_email_and_wrong_password() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;
    token_of(test::call_service(&app, signup_request("Max", "max@example.com").to_request()).await).await;

    let wrong_password = test::TestRequest::post()
        .uri("/api/v1/users/login")
        .set_json(json!({ "email": "max@example.com", "password": "nope12345" }))
        .to_request();
    let unknown_email = test::TestRequest::post()
        .uri("/api/v1/users/login")
        .set_json(json!({ "email": "nobody@example.com", "password": PASSWORD }))
        .to_request();

    let a = json_body(test::call_service(&app, wrong_password).await).await;
    let b = json_body(test::call_service(&app, unknown_email).await).await;
    assert_eq!(a["message"], "Incorrect email or password");
    assert_eq!(a["message"], b["message"]);

    let missing = test::TestRequest::post()
        .uri("/api/v1/users/login")
        .set_json(json!({ "email": "max@example.com" }))
        .to_request();
    let resp = test::call_service(&app, missing).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_me_with_bearer_and_cookie() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;
    let token =
        token_of(test::call_service(&app, signup_request("Sophie", "sophie@example.com").to_request()).await)
            .await;

    let by_header = test::TestRequest::get()
        .uri("/api/v1/users/me")
        .insert_header(bearer(&token))
        .to_request();
    let body = json_body(test::call_service(&app, by_header).await).await;
    assert_eq!(body["data"]["user"]["email"], "sophie@example.com");

    let by_cookie = test::TestRequest::get()
        .uri("/api/v1/users/me")
        .cookie(Cookie::new("jwt", token.clone()))
        .to_request();
    let resp = test::call_service(&app, by_cookie).await;
    assert_eq!(resp.status(), 200);

    let anonymous = test::TestRequest::get().uri("/api/v1/users/me").to_request();
    let resp = test::call_service(&app, anonymous).await;
    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_logout_replaces_cookie() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/users/logout").to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == "jwt")
        .expect("logout cookie")
        .into_owned();
    assert_eq!(cookie.value(), "loggedout");

    let session = test::TestRequest::get()
        .uri("/api/v1/users/session")
        .cookie(Cookie::new("jwt", "loggedout"))
        .to_request();
    let body = json_body(test::call_service(&app, session).await).await;
    assert!(body["data"]["user"].is_null());

    let me = test::TestRequest::get()
        .uri("/api/v1/users/me")
        .cookie(Cookie::new("jwt", "loggedout"))
        .to_request();
    let resp = test::call_service(&app, me).await;
    assert_eq!(resp.status(), 401);
    let body = json_body(resp).await;
    assert_eq!(body["error"], "TOKEN_INVALID");
}

#[actix_web::test]
async fn test_session_reports_logged_in_user() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;
    let token =
        token_of(test::call_service(&app, signup_request("Kate", "kate@example.com").to_request()).await)
            .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/users/session")
        .insert_header(bearer(&token))
        .to_request();
    let body = json_body(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["user"]["email"], "kate@example.com");
}

#[actix_web::test]
async fn test_password_reset_flow_is_single_use() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;
    token_of(test::call_service(&app, signup_request("Ben", "ben@example.com").to_request()).await).await;

    let forgot = test::TestRequest::post()
        .uri("/api/v1/users/forgotPassword")
        .set_json(json!({ "email": "ben@example.com" }))
        .to_request();
    let resp = test::call_service(&app, forgot).await;
    assert_eq!(resp.status(), 200);
    let body = json_body(resp).await;
    assert_eq!(body["message"], "Token sent to email!");
    assert!(body.get("token").is_none());

    let mail = ctx.mailer.last_reset().await.expect("reset mail");
    let url = mail.url().to_string();
    assert!(url.starts_with("http://127.0.0.1:3000/api/v1/users/resetPassword/"));
    let path = url.trim_start_matches("http://127.0.0.1:3000").to_string();

    let new_password = json!({ "password": "newpass123", "passwordConfirm": "newpass123" });
    let reset = test::TestRequest::patch()
        .uri(&path)
        .set_json(new_password.clone())
        .to_request();
    let resp = test::call_service(&app, reset).await;
    assert_eq!(resp.status(), 200);

    let again = test::TestRequest::patch().uri(&path).set_json(new_password).to_request();
    let resp = test::call_service(&app, again).await;
    assert_eq!(resp.status(), 400);
    let body = json_body(resp).await;
    assert_eq!(body["message"], "Token is invalid or has expired");

    let login = test::TestRequest::post()
        .uri("/api/v1/users/login")
        .set_json(json!({ "email": "ben@example.com", "password": "newpass123" }))
        .to_request();
    assert_eq!(test::call_service(&app, login).await.status(), 200);
}

#[actix_web::test]
async fn test_forgot_password_unknown_email_and_delivery_failure() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let unknown = test::TestRequest::post()
        .uri("/api/v1/users/forgotPassword")
        .set_json(json!({ "email": "ghost@example.com" }))
        .to_request();
    assert_eq!(test::call_service(&app, unknown).await.status(), 404);

    token_of(test::call_service(&app, signup_request("Eve", "eve@example.com").to_request()).await).await;
    ctx.mailer.set_failing(true);

    let forgot = test::TestRequest::post()
        .uri("/api/v1/users/forgotPassword")
        .set_json(json!({ "email": "eve@example.com" }))
        .to_request();
    let resp = test::call_service(&app, forgot).await;
    assert_eq!(resp.status(), 500);
    let body = json_body(resp).await;
    assert_eq!(body["status"], "error");
    assert_eq!(
        body["message"],
        "There was an error sending the email. Try again later!"
    );

    let user = ctx
        .state
        .auth_service
        .login("eve@example.com", PASSWORD)
        .await
        .unwrap()
        .user;
    assert!(user.password_reset_token.is_none());
    assert!(user.password_reset_expires.is_none());
}

#[actix_web::test]
async fn test_update_my_password() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;
    let token =
        token_of(test::call_service(&app, signup_request("Tim", "tim@example.com").to_request()).await)
            .await;

    let wrong = test::TestRequest::patch()
        .uri("/api/v1/users/updateMyPassword")
        .insert_header(bearer(&token))
        .set_json(json!({
            "passwordCurrent": "not-my-password",
            "password": "newpass123",
            "passwordConfirm": "newpass123",
        }))
        .to_request();
    let resp = test::call_service(&app, wrong).await;
    assert_eq!(resp.status(), 401);
    let body = json_body(resp).await;
    assert_eq!(body["message"], "Your current password is wrong");

    let right = test::TestRequest::patch()
        .uri("/api/v1/users/updateMyPassword")
        .insert_header(bearer(&token))
        .set_json(json!({
            "passwordCurrent": PASSWORD,
            "password": "newpass123",
            "passwordConfirm": "newpass123",
        }))
        .to_request();
    let fresh = token_of(test::call_service(&app, right).await).await;

    let with_old = test::TestRequest::get()
        .uri("/api/v1/users/me")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, with_old).await;
    assert_eq!(resp.status(), 401);
    let body = json_body(resp).await;
    assert_eq!(body["message"], "User recently changed password! Please log in again.");

    let with_fresh = test::TestRequest::get()
        .uri("/api/v1/users/me")
        .insert_header(bearer(&fresh))
        .to_request();
    assert_eq!(test::call_service(&app, with_fresh).await.status(), 200);

    let anonymous = test::TestRequest::patch()
        .uri("/api/v1/users/updateMyPassword")
        .set_json(json!({}))
        .to_request();
    assert_eq!(test::call_service(&app, anonymous).await.status(), 401);
}
