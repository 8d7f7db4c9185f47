//! JWT token generation and validation
//!
//! Issues and verifies the signed identity tokens carried as bearer
//! credentials. Keys are derived from the configured secret once.

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use inventory_shared::{AuthError, Identity, Role};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: i32,
    /// Role name at issue time
    pub role: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Pre-computed JWT keys for efficient token operations
#[derive(Clone)]
pub struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    /// Create new JWT keys from secret
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }

    pub fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    pub fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }
}

/// JWT service for token operations
///
/// Cheap to clone; keep one in `AppState` rather than building per request.
#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    validation: Arc<Validation>,
    access_token_expiry_secs: i64,
}

impl JwtService {
    pub fn new(secret: &str, access_token_expiry_secs: i64) -> Self {
        // Expiry is checked against an explicit clock in `verify_at`, so the
        // library's own wall-clock check (and its leeway) is switched off.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            keys: JwtKeys::new(secret),
            validation: Arc::new(validation),
            access_token_expiry_secs,
        }
    }

    /// Issue a token for an identity, valid from now
    #[inline]
    pub fn issue(&self, identity: &Identity) -> Result<String> {
        self.issue_at(identity, Utc::now())
    }

    /// Issue a token as if the current time were `now`
    pub fn issue_at(&self, identity: &Identity, now: DateTime<Utc>) -> Result<String> {
        let exp = now + Duration::seconds(self.access_token_expiry_secs);

        let claims = Claims {
            sub: identity.id,
            role: identity.role.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, self.keys.encoding())
            .map_err(|e| anyhow::anyhow!("Failed to generate access token: {}", e))
    }

    /// Verify a token against the current time
    #[inline]
    pub fn verify(&self, token: &str) -> Result<Identity, AuthError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify a token as if the current time were `now`
    ///
    /// Signature and shape are checked before expiry, so a forged token is
    /// reported as invalid even when its `exp` has also passed.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Identity, AuthError> {
        let claims = decode::<Claims>(token, self.keys.decoding(), &self.validation)
            .map_err(|e| {
                debug!(error = %e, "Token rejected");
                AuthError::InvalidToken
            })?
            .claims;

        if now.timestamp() > claims.exp {
            return Err(AuthError::ExpiredToken);
        }

        let role = claims.role.parse::<Role>().map_err(|e| {
            debug!(error = %e, "Token carries unknown role");
            AuthError::InvalidToken
        })?;

        Ok(Identity::new(claims.sub, role))
    }

    /// Access token lifetime in seconds
    #[inline]
    pub fn access_token_expiry_secs(&self) -> i64 {
        self.access_token_expiry_secs
    }
}
