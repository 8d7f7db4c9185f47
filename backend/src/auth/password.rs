//! Password hashing using bcrypt
//!
//! Provides salted one-way hashing and verification of credentials.
//!
//! # Performance Considerations
//!
//! bcrypt is intentionally CPU-intensive. Async callers should use the
//! `_async` variants, which run on the blocking thread pool.

use inventory_shared::validation::validate_hashable;
use thiserror::Error;

/// bcrypt work factor
pub const HASH_COST: u32 = 10;

/// Password hashing failures
#[derive(Debug, Error)]
pub enum PasswordError {
    /// The plaintext cannot be hashed faithfully
    #[error("{0}")]
    Malformed(String),

    /// The stored digest could not be parsed or produced
    #[error("bcrypt failure: {0}")]
    Digest(#[from] bcrypt::BcryptError),

    #[error("Task join error: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Password hashing service
///
/// Stateless; every digest embeds its own salt and cost.
pub struct PasswordService;

impl PasswordService {
    /// Hash a password using bcrypt (blocking operation)
    pub fn hash(password: &str) -> Result<String, PasswordError> {
        validate_hashable(password).map_err(PasswordError::Malformed)?;
        Ok(bcrypt::hash(password, HASH_COST)?)
    }

    /// Hash a password asynchronously (non-blocking)
    pub async fn hash_async(password: String) -> Result<String, PasswordError> {
        tokio::task::spawn_blocking(move || Self::hash(&password)).await?
    }

    /// Verify a password against a digest (blocking operation)
    ///
    /// A plaintext that could never have been hashed does not match anything.
    /// Comparison is constant-time inside bcrypt.
    pub fn verify(password: &str, hash: &str) -> Result<bool, PasswordError> {
        if validate_hashable(password).is_err() {
            return Ok(false);
        }
        Ok(bcrypt::verify(password, hash)?)
    }

    /// Verify a password asynchronously (non-blocking)
    pub async fn verify_async(password: String, hash: String) -> Result<bool, PasswordError> {
        tokio::task::spawn_blocking(move || Self::verify(&password, &hash)).await?
    }
}
