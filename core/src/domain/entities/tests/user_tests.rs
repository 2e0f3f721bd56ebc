//! Unit tests for the user entity

use chrono::{Duration, Utc};

use crate::domain::entities::user::{User, UserRole, DEFAULT_PHOTO};

fn sample_user() -> User {
    User::new("Laura Wilson", "Laura@Example.com", "hash".to_string())
}

#[test]
fn test_new_user_defaults() {
    let user = sample_user();

    assert_eq!(user.email, "laura@example.com");
    assert_eq!(user.photo, DEFAULT_PHOTO);
    assert_eq!(user.role, UserRole::User);
    assert!(user.password_changed_at.is_none());
    assert!(user.password_reset_token.is_none());
    assert!(user.password_reset_expires.is_none());
    assert_eq!(user.first_name(), "Laura");
}

#[test]
fn test_credentials_never_serialized() {
    let mut user = sample_user();
    user.set_password_reset("digest".into(), Utc::now() + Duration::minutes(10));

    let json = serde_json::to_value(&user).unwrap();
    assert!(json.get("password_hash").is_none());
    assert!(json.get("password_reset_token").is_none());
    assert!(json.get("password_reset_expires").is_none());
    assert!(json.get("password_changed_at").is_none());
    assert_eq!(json["role"], "user");
}

#[test]
fn test_role_serialization() {
    assert_eq!(serde_json::to_string(&UserRole::LeadGuide).unwrap(), "\"lead-guide\"");
    assert_eq!("lead-guide".parse::<UserRole>().unwrap(), UserRole::LeadGuide);
    assert_eq!(UserRole::Admin.to_string(), "admin");
    assert!("owner".parse::<UserRole>().is_err());
}

#[test]
fn test_changed_password_after() {
    let mut user = sample_user();
    let issued_before = Utc::now().timestamp_millis() - 60_000;
    assert!(!user.changed_password_after(issued_before));

    user.set_password("new-hash".into());
    assert!(user.changed_password_after(issued_before));

    let changed_at = user.password_changed_at.unwrap().timestamp_millis();
    // Within the same second, only the order of the instants counts
    assert!(user.changed_password_after(changed_at - 1));
    assert!(!user.changed_password_after(changed_at));
    assert!(!user.changed_password_after(changed_at + 1));
}

#[test]
fn test_reset_fields_set_and_cleared_together() {
    let mut user = sample_user();
    let now = Utc::now();

    user.set_password_reset("digest".into(), now + Duration::minutes(10));
    assert!(user.has_valid_reset("digest", now));
    assert!(!user.has_valid_reset("other", now));
    assert!(!user.has_valid_reset("digest", now + Duration::minutes(11)));

    user.clear_password_reset();
    assert!(user.password_reset_token.is_none());
    assert!(user.password_reset_expires.is_none());
    assert!(!user.has_valid_reset("digest", now));
}

#[test]
fn test_has_role() {
    let mut user = sample_user();
    assert!(user.has_role(&[UserRole::User, UserRole::Admin]));
    assert!(!user.has_role(&[UserRole::Admin]));

    user.role = UserRole::Admin;
    assert!(user.has_role(&[UserRole::Admin]));
    assert!(!user.has_role(&[]));
}
