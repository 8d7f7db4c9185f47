//! User management API routes
//!
//! Responses are built from `UserResponse`, which has no password field.

use crate::error::ApiResult;
use crate::routes::{
    extract::{IdPath, ValidatedJson},
    paths,
};
use crate::services::UserService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use inventory_shared::{CreateUserRequest, UpdateUserRequest, UserResponse};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route(paths::USERS, get(list_users).post(create_user))
        .route(
            paths::USER_BY_ID,
            get(get_user).patch(update_user).delete(delete_user),
        )
}

/// POST /api/v1/users
async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let user = UserService::create(state.users(), req).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/v1/users
async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = UserService::list(state.users()).await?;
    Ok(Json(users))
}

/// GET /api/v1/users/:id
async fn get_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<UserResponse>> {
    let user = UserService::get(state.users(), id).await?;
    Ok(Json(user))
}

/// PATCH /api/v1/users/:id
async fn update_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(req): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user = UserService::update(state.users(), id, req).await?;
    Ok(Json(user))
}

/// DELETE /api/v1/users/:id
async fn delete_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<UserResponse>> {
    let user = UserService::delete(state.users(), id).await?;
    Ok(Json(user))
}
