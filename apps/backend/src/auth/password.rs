//! Password hashing primitive.
//!
//! Thin wrapper over Argon2id. Hashing happens once per seeded account at
//! startup; verification runs on every login and is intentionally slow, so
//! callers should move it off the async executor (see the login handler).

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::AppError;

/// Hash a plaintext password with a fresh random salt.
pub fn hash_password(plaintext: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))
}

/// Verify a plaintext password against a stored PHC-format hash.
///
/// A malformed stored hash counts as a failed verification rather than an
/// internal error; login must not distinguish the two.
pub fn verify_password(plaintext: &str, password_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(password_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed)
        .is_ok()
}
