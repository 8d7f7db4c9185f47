//! Authentication middleware
//!
//! The gate reads the `Authorization: Bearer <token>` header, verifies the
//! token and attaches the resulting [`Identity`] to the request extensions.
//! A request either leaves it authenticated or is rejected with 401; it
//! never reaches the authorization gate or a handler unauthenticated.

use crate::auth::JwtService;
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{FromRef, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use inventory_shared::{AuthError, Identity, Role};
use tracing::debug;

/// Extract the bearer token from request headers
///
/// The scheme is matched case-insensitively (`Bearer`, `bearer`, ...).
/// A missing header, a non-Bearer scheme and an empty token all count as
/// missing credentials.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim_start().split_once(' '))
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("Bearer"))
        .map(|(_, token)| token.trim())
        .ok_or(AuthError::MissingCredentials)?;

    if token.is_empty() {
        return Err(AuthError::MissingCredentials);
    }
    Ok(token)
}

/// Resolve the caller's identity from request headers
pub fn authenticate(headers: &HeaderMap, jwt: &JwtService) -> Result<Identity, AuthError> {
    let token = bearer_token(headers)?;
    jwt.verify(token)
}

/// Authenticated caller extracted from the request
///
/// Uses the identity attached by [`auth_middleware`] when present and
/// otherwise authenticates the request itself.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub id: i32,
    pub role: Role,
}

impl From<Identity> for AuthUser {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id,
            role: identity.role,
        }
    }
}

impl AuthUser {
    pub fn identity(&self) -> Identity {
        Identity::new(self.id, self.role)
    }
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(identity) = parts.extensions.get::<Identity>() {
            return Ok((*identity).into());
        }

        let app_state = AppState::from_ref(state);
        let identity = authenticate(&parts.headers, app_state.jwt())?;
        Ok(identity.into())
    }
}

/// Authentication middleware
///
/// Install with `route_layer` on every protected router, outside the
/// authorization middleware.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let identity = authenticate(request.headers(), state.jwt()).map_err(|err| {
        debug!(
            method = %request.method(),
            uri = %request.uri(),
            reason = err.code(),
            "Request rejected by authentication gate"
        );
        err
    })?;

    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}
