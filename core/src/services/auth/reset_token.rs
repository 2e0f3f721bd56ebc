//! One-time password reset tokens
//!
//! The raw token only ever leaves the process inside the reset email.
//! Storage keeps its SHA-256 digest.

use rand::RngCore;
use sha2::{Digest, Sha256};

const RESET_TOKEN_BYTES: usize = 32;

/// Generates a raw reset token and its digest, as `(raw, digest)`
pub fn generate_reset_token() -> (String, String) {
    let mut bytes = [0u8; RESET_TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    let raw = hex::encode(bytes);
    let digest = hash_reset_token(&raw);
    (raw, digest)
}

/// SHA-256 hex digest of a raw reset token
pub fn hash_reset_token(raw: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw.as_bytes());
    hex::encode(hasher.finalize())
}
