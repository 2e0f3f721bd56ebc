//! Role-based authorization

use crate::domain::entities::user::{User, UserRole};
use crate::errors::{AuthError, DomainError};

/// Allows the request only if `user` holds one of `roles`
pub fn authorize(user: &User, roles: &[UserRole]) -> Result<(), DomainError> {
    if user.has_role(roles) {
        Ok(())
    } else {
        Err(AuthError::Forbidden.into())
    }
}
