//! Route definitions for the inventory API
//!
//! This module organizes all API routes and applies middleware.
//!
//! Protected routes are registered with their full path so the matched path
//! seen by the authorization gate is exactly the key in the route policy.

use crate::auth::{auth_middleware, authorize_middleware};
use crate::state::AppState;
use axum::{
    http::{header, Method},
    middleware,
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod auth;
mod extract;
mod health;
mod products;
mod users;


pub use auth::{login_routes, session_routes};
pub use extract::{IdPath, ValidatedJson};
pub use products::product_routes;
pub use users::user_routes;

/// Route path patterns, shared with the route policy
pub mod paths {
    pub const AUTH_LOGIN: &str = "/api/v1/auth/login";
    pub const AUTH_ME: &str = "/api/v1/auth/me";
    pub const PRODUCTS: &str = "/api/v1/products";
    pub const PRODUCT_BY_ID: &str = "/api/v1/products/:id";
    pub const USERS: &str = "/api/v1/users";
    pub const USER_BY_ID: &str = "/api/v1/users/:id";
}

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .merge(login_routes())
        .merge(protected_routes(state.clone()))
        // Apply middleware layers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Routes behind the authentication and authorization gates
///
/// The last `route_layer` added runs first, so authentication always
/// precedes authorization.
fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(session_routes())
        .merge(product_routes())
        .merge(user_routes())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            authorize_middleware,
        ))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
