//! Input validation functions
//!
//! This module provides validation utilities for user input.
//! Request types declare their constraints with the `validator` derive;
//! the checks that derive cannot express live here.

use std::borrow::Cow;
use validator::ValidationError;

/// Longest password bcrypt digests without silent truncation
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Shortest password accepted when creating or updating a user
pub const MIN_PASSWORD_CHARS: usize = 8;

/// Check that a plaintext can be fed to the password hasher
///
/// bcrypt ignores everything past 72 bytes and treats NUL as a terminator,
/// so both would make distinct passwords hash alike.
pub fn validate_hashable(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password cannot be empty".to_string());
    }
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(format!(
            "Password must be at most {} bytes",
            MAX_PASSWORD_BYTES
        ));
    }
    if password.contains('\0') {
        return Err("Password cannot contain NUL characters".to_string());
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_CHARS
        ));
    }
    validate_hashable(password)
}

/// `validator` adapter for [`validate_password`]
pub fn password_constraint(password: &str) -> Result<(), ValidationError> {
    validate_password(password).map_err(|msg| {
        let mut err = ValidationError::new("password");
        err.message = Some(Cow::from(msg));
        err
    })
}

/// Reject strings that are empty once surrounding whitespace is removed
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(Cow::from("Value cannot be blank"));
        return Err(err);
    }
    Ok(())
}
