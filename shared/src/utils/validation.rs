//! Input validation helpers shared by the domain and HTTP layers

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$").unwrap()
});

/// Check if an email address is syntactically valid
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    email.len() <= 254 && EMAIL_RE.is_match(email)
}

/// Canonical storage form of an email address
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Password length check, counted in characters rather than bytes
pub fn password_long_enough(password: &str, min_length: usize) -> bool {
    password.chars().count() >= min_length
}

/// First whitespace-separated word of a display name, used for greetings
pub fn first_name(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or(name)
}
