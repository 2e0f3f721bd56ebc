//! Session value object returned by every operation that logs a user in.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{IssuedToken, User};

/// A signed session token together with the user it belongs to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthSession {
    /// Encoded JWT
    pub token: String,

    /// Token lifetime in seconds
    pub expires_in: i64,

    pub user: User,
}

impl AuthSession {
    pub fn new(issued: IssuedToken, user: User) -> Self {
        Self {
            token: issued.token,
            expires_in: issued.expires_in,
            user,
        }
    }
}
