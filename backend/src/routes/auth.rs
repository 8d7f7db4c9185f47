//! Authentication routes
//!
//! Login is public; `/me` sits behind both gates like every other
//! protected route.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::routes::{extract::ValidatedJson, paths};
use crate::services::UserService;
use crate::state::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use inventory_shared::{AuthToken, LoginRequest, UserResponse};

/// Public auth routes
pub fn login_routes() -> Router<AppState> {
    Router::new().route(paths::AUTH_LOGIN, post(login))
}

/// Protected auth routes
pub fn session_routes() -> Router<AppState> {
    Router::new().route(paths::AUTH_ME, get(get_me))
}

/// Login with email and password
///
/// POST /api/v1/auth/login
async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<AuthToken>> {
    let token = UserService::login(state.users(), state.jwt(), &req.email, &req.password).await?;
    Ok(Json(token))
}

/// Current user
///
/// GET /api/v1/auth/me
async fn get_me(State(state): State<AppState>, auth_user: AuthUser) -> ApiResult<Json<UserResponse>> {
    let user = UserService::get(state.users(), auth_user.id).await?;
    Ok(Json(user))
}
