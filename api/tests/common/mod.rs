//! Test wiring: the real app over in-memory repositories and a recording mailer

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::ServiceResponse,
    http::header,
    test, web,
};
use serde_json::{json, Value};

use tb_api::AppState;
use tb_core::domain::entities::{Tour, User, UserRole};
use tb_core::repositories::{
    MockReviewRepository, MockTourRepository, MockUserRepository, TourRepository, UserRepository,
};
use tb_core::services::auth::{AuthService, AuthServiceConfig};
use tb_core::services::mail::MockMailer;
use tb_core::services::review::ReviewService;
use tb_core::services::token::{TokenService, TokenServiceConfig};
use tb_shared::config::AppConfig;

pub const PASSWORD: &str = "pass1234";

pub type TestState = AppState<MockUserRepository, MockMailer, MockReviewRepository, MockTourRepository>;

pub struct TestContext {
    pub state: web::Data<TestState>,
    pub users: Arc<MockUserRepository>,
    pub tours: Arc<MockTourRepository>,
    pub reviews: Arc<MockReviewRepository>,
    pub mailer: Arc<MockMailer>,
}

pub fn context() -> TestContext {
    context_with(AppConfig::development())
}

pub fn context_with(config: AppConfig) -> TestContext {

    let users = Arc::new(MockUserRepository::new());
    let tours = Arc::new(MockTourRepository::new());
    let reviews = Arc::new(MockReviewRepository::new());
    let mailer = Arc::new(MockMailer::new());

    let token_service = Arc::new(TokenService::new(TokenServiceConfig {
        jwt_secret: "api-test-secret".to_string(),
        ..TokenServiceConfig::from(&config.auth.jwt)
    }));
    let auth_service = Arc::new(AuthService::new(
        users.clone(),
        mailer.clone(),
        token_service,
        AuthServiceConfig {
            bcrypt_cost: 4,
            ..AuthServiceConfig::from(&config.auth.password)
        },
    ));
    let review_service = Arc::new(ReviewService::new(
        reviews.clone(),
        tours.clone(),
        config.rating.clone(),
    ));

    TestContext {
        state: web::Data::new(AppState::new(auth_service, review_service, &config)),
        users,
        tours,
        reviews,
        mailer,
    }
}

impl TestContext {
    pub async fn tour(&self, name: &str) -> Tour {
        self.tours.create(Tour::new(name, 497, 4.5)).await.unwrap()
    }

    pub async fn stored_tour(&self, tour: &Tour) -> Tour {
        self.tours.find_by_id(tour.id).await.unwrap().unwrap()
    }

    pub async fn make_admin(&self, email: &str) -> User {
        let mut user = self.users.find_by_email(email).await.unwrap().unwrap();
        user.role = UserRole::Admin;
        self.users.update(user).await.unwrap()
    }
}

pub async fn json_body<B: MessageBody>(resp: ServiceResponse<B>) -> Value {
    test::read_body_json(resp).await
}

pub fn signup_request(name: &str, email: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/api/v1/users/signup")
        .set_json(json!({
            "name": name,
            "email": email,
            "password": PASSWORD,
            "passwordConfirm": PASSWORD,
        }))
}

/// Session token from a signup or login response
pub async fn token_of<B: MessageBody>(resp: ServiceResponse<B>) -> String {
    assert!(resp.status().is_success(), "expected a session, got {}", resp.status());
    let body = json_body(resp).await;
    body["token"].as_str().unwrap().to_string()
}

pub fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", token))
}
