use thiserror::Error;

/// Work factor applied when hashing credentials at account-creation time.
pub const BCRYPT_COST: u32 = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PasswordError {
    #[error("password hashing failed")]
    Hash,
}

/// Hash a plaintext password with a fresh per-hash salt.
///
/// Only used at principal-creation time (registration, seeding); the
/// request path never writes.
pub fn hash_password(plaintext: &str) -> Result<String, PasswordError> {
    bcrypt::hash(plaintext, BCRYPT_COST).map_err(|_| PasswordError::Hash)
}

/// Verify a plaintext candidate against a stored hash.
///
/// Every failure mode — wrong password, malformed or truncated stored
/// hash — collapses to `false` rather than a distinguishable error. The
/// comparison against the computed hash is constant-time inside bcrypt.
pub fn verify_password(plaintext: &str, stored_hash: &str) -> bool {
    bcrypt::verify(plaintext, stored_hash).unwrap_or(false)
}
