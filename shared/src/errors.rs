//! Error types for the inventory application

use thiserror::Error;

/// Authentication and authorization failures
///
/// Every variant is terminal for the request that raised it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("Missing bearer credentials")]
    MissingCredentials,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    ExpiredToken,

    #[error("Role not permitted for this route")]
    Forbidden,
}

impl AuthError {
    /// Machine-readable code used in error response bodies
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::MissingCredentials => "MISSING_CREDENTIALS",
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::InvalidToken => "INVALID_TOKEN",
            AuthError::ExpiredToken => "TOKEN_EXPIRED",
            AuthError::Forbidden => "FORBIDDEN",
        }
    }

    /// Whether the failure is about who the caller is (401) rather than
    /// what the caller may do (403)
    pub fn is_authentication_failure(&self) -> bool {
        !matches!(self, AuthError::Forbidden)
    }
}

/// A role string outside the known set
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown role: {0:?}")]
pub struct UnknownRole(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_forbidden_is_authorization_failure() {
        assert!(AuthError::MissingCredentials.is_authentication_failure());
        assert!(AuthError::InvalidToken.is_authentication_failure());
        assert!(AuthError::ExpiredToken.is_authentication_failure());
        assert!(AuthError::InvalidCredentials.is_authentication_failure());
        assert!(!AuthError::Forbidden.is_authentication_failure());
    }

    #[test]
    fn test_codes_are_distinct() {
        let codes = [
            AuthError::MissingCredentials.code(),
            AuthError::InvalidCredentials.code(),
            AuthError::InvalidToken.code(),
            AuthError::ExpiredToken.code(),
            AuthError::Forbidden.code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
