//! Route policy and the authorization gate
//!
//! Each protected route declares the roles allowed to call it. The table is
//! built once at startup and consulted per request using the HTTP method and
//! the matched path pattern (e.g. `/api/v1/products/:id`).
//!
//! Routes that are missing from the table, or declared with no roles, deny
//! every caller. A HEAD request with no entry of its own uses the GET entry
//! for the same path, matching how the router serves HEAD.

use crate::error::ApiError;
use crate::routes::paths;
use crate::state::AppState;
use axum::{
    extract::{MatchedPath, Request, State},
    http::Method,
    middleware::Next,
    response::Response,
};
use inventory_shared::{AuthError, Identity, Role};
use std::collections::{HashMap, HashSet};
use tracing::warn;

const ALL_ROLES: &[Role] = &[Role::Admin, Role::Superadmin, Role::Regular];
const STAFF: &[Role] = &[Role::Admin, Role::Superadmin];
const SUPERADMIN_ONLY: &[Role] = &[Role::Superadmin];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct RouteKey {
    method: Method,
    path: String,
}

/// Immutable mapping from route to permitted roles
#[derive(Debug, Clone, Default)]
pub struct RoutePolicy {
    rules: HashMap<RouteKey, HashSet<Role>>,
}

impl RoutePolicy {
    /// An empty policy; denies everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the roles allowed on `method path`
    ///
    /// Declaring the same route twice replaces the earlier entry.
    pub fn allow(mut self, method: Method, path: &str, roles: &[Role]) -> Self {
        self.rules.insert(
            RouteKey {
                method,
                path: path.to_string(),
            },
            roles.iter().copied().collect(),
        );
        self
    }

    /// The role table of the inventory API
    pub fn inventory() -> Self {
        Self::new()
            .allow(Method::GET, paths::AUTH_ME, ALL_ROLES)
            // Products
            .allow(Method::POST, paths::PRODUCTS, STAFF)
            .allow(Method::GET, paths::PRODUCTS, ALL_ROLES)
            .allow(Method::GET, paths::PRODUCT_BY_ID, ALL_ROLES)
            .allow(Method::PATCH, paths::PRODUCT_BY_ID, STAFF)
            .allow(Method::DELETE, paths::PRODUCT_BY_ID, STAFF)
            // Users
            .allow(Method::POST, paths::USERS, SUPERADMIN_ONLY)
            .allow(Method::GET, paths::USERS, STAFF)
            .allow(Method::GET, paths::USER_BY_ID, STAFF)
            .allow(Method::PATCH, paths::USER_BY_ID, SUPERADMIN_ONLY)
            .allow(Method::DELETE, paths::USER_BY_ID, SUPERADMIN_ONLY)
    }

    /// Roles declared for a route, or `None` when the route is undeclared
    pub fn allowed_roles(&self, method: &Method, path: &str) -> Option<&HashSet<Role>> {
        let lookup = |method: &Method| {
            self.rules.get(&RouteKey {
                method: method.clone(),
                path: path.to_string(),
            })
        };

        match lookup(method) {
            None if *method == Method::HEAD => lookup(&Method::GET),
            found => found,
        }
    }

    /// Allow iff the identity's role is declared for the route
    pub fn authorize(
        &self,
        identity: &Identity,
        method: &Method,
        path: &str,
    ) -> Result<(), AuthError> {
        match self.allowed_roles(method, path) {
            Some(roles) if roles.contains(&identity.role) => Ok(()),
            _ => Err(AuthError::Forbidden),
        }
    }
}

/// Authorization middleware
///
/// Runs after [`super::auth_middleware`], which attaches the [`Identity`].
/// Must be installed with `route_layer` so the matched path is known.
pub async fn authorize_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let identity = request
        .extensions()
        .get::<Identity>()
        .copied()
        .ok_or(AuthError::MissingCredentials)?;

    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_default();

    if let Err(err) = state.policy().authorize(&identity, request.method(), &path) {
        warn!(
            user_id = identity.id,
            role = %identity.role,
            method = %request.method(),
            path = %path,
            "Role not permitted"
        );
        return Err(err.into());
    }

    Ok(next.run(request).await)
}
