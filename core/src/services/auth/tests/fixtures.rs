//! Shared wiring for authentication service tests

use std::sync::Arc;

use crate::domain::entities::token::{Claims, JWT_AUDIENCE, JWT_ISSUER};
use crate::domain::entities::user::User;
use crate::domain::value_objects::AuthSession;
use crate::repositories::MockUserRepository;
use crate::services::auth::{AuthService, AuthServiceConfig};
use crate::services::mail::MockMailer;
use crate::services::token::{TokenService, TokenServiceConfig};

pub const PASSWORD: &str = "pass1234";
pub const RESET_BASE: &str = "https://tourbook.test/api/v1/users/resetPassword";

pub struct Harness {
    pub service: AuthService<MockUserRepository, MockMailer>,
    pub users: Arc<MockUserRepository>,
    pub mailer: Arc<MockMailer>,
    pub tokens: Arc<TokenService>,
}

pub fn harness() -> Harness {
    harness_with_token_config(TokenServiceConfig {
        jwt_secret: "auth-test-secret".to_string(),
        expires_in_seconds: 3600,
        ..Default::default()
    })
}

pub fn harness_with_token_config(token_config: TokenServiceConfig) -> Harness {
    let users = Arc::new(MockUserRepository::new());
    let mailer = Arc::new(MockMailer::new());
    let tokens = Arc::new(TokenService::new(token_config));
    let config = AuthServiceConfig {
        bcrypt_cost: 4,
        ..Default::default()
    };

    Harness {
        service: AuthService::new(users.clone(), mailer.clone(), tokens.clone(), config),
        users,
        mailer,
        tokens,
    }
}

impl Harness {
    pub async fn signup(&self, email: &str) -> AuthSession {
        self.service
            .signup("Jonas Schmedtmann", email, PASSWORD, PASSWORD, "https://tourbook.test/me")
            .await
            .unwrap()
    }

    /// A valid session token for `user` whose `iat` lies `seconds_ago` in the past
    pub fn backdated_token(&self, user: &User, seconds_ago: i64) -> String {
        let mut claims = Claims::new_session(user.id, 3600, JWT_ISSUER, JWT_AUDIENCE);
        claims.iat -= seconds_ago;
        claims.iat_ms -= seconds_ago * 1000;
        claims.nbf -= seconds_ago;
        self.tokens.encode_jwt(&claims).unwrap()
    }
}
