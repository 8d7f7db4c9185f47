//! User service for authentication and user management
//!
//! Password hashing and verification run on the blocking thread pool;
//! store calls are plain awaits with no locks held across them.

use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::{NewUser, UserChanges, UserRecord, UserStore};
use inventory_shared::{
    AuthError, AuthToken, CreateUserRequest, Identity, Role, UpdateUserRequest, UserResponse,
};
use tracing::info;
use validator::Validate;

impl From<UserRecord> for UserResponse {
    fn from(record: UserRecord) -> Self {
        UserResponse {
            id: record.id,
            email: record.email,
            role: record.role,
        }
    }
}

fn user_not_found(id: i32) -> ApiError {
    ApiError::NotFound(format!("No user with id {}", id))
}

/// User service
pub struct UserService;

impl UserService {
    /// Login with email and password
    ///
    /// Unknown email and wrong password are indistinguishable to the caller.
    pub async fn login(
        store: &dyn UserStore,
        jwt: &JwtService,
        email: &str,
        password: &str,
    ) -> Result<AuthToken, ApiError> {
        let user = store
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let valid =
            PasswordService::verify_async(password.to_string(), user.password_hash.clone())
                .await?;
        if !valid {
            return Err(AuthError::InvalidCredentials.into());
        }

        let identity = Identity::new(user.id, user.role);
        let access_token = jwt.issue(&identity).map_err(ApiError::Internal)?;

        info!(user_id = user.id, role = %user.role, "User logged in");

        Ok(AuthToken {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: jwt.access_token_expiry_secs(),
        })
    }

    /// Create a user
    ///
    /// The email is checked before hashing so a duplicate is rejected
    /// without touching the store; the store's own uniqueness check covers
    /// concurrent creates.
    pub async fn create(
        store: &dyn UserStore,
        req: CreateUserRequest,
    ) -> Result<UserResponse, ApiError> {
        if store.find_by_email(&req.email).await?.is_some() {
            return Err(ApiError::Conflict("Email already registered".to_string()));
        }

        let password_hash = PasswordService::hash_async(req.password).await?;

        let user = store
            .create(NewUser {
                email: req.email,
                password_hash,
                role: req.role,
            })
            .await?;

        info!(user_id = user.id, role = %user.role, "User created");
        Ok(user.into())
    }

    /// List all users (public view only)
    pub async fn list(store: &dyn UserStore) -> Result<Vec<UserResponse>, ApiError> {
        let users = store.list().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// Get a user by id
    pub async fn get(store: &dyn UserStore, id: i32) -> Result<UserResponse, ApiError> {
        store
            .find_by_id(id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| user_not_found(id))
    }

    /// Apply a partial update; a new password is re-hashed
    pub async fn update(
        store: &dyn UserStore,
        id: i32,
        req: UpdateUserRequest,
    ) -> Result<UserResponse, ApiError> {
        if let Some(email) = &req.email {
            if let Some(existing) = store.find_by_email(email).await? {
                if existing.id != id {
                    return Err(ApiError::Conflict("Email already registered".to_string()));
                }
            }
        }

        let password_hash = match req.password {
            Some(password) => Some(PasswordService::hash_async(password).await?),
            None => None,
        };

        let changes = UserChanges {
            email: req.email,
            password_hash,
            role: req.role,
        };

        let user = store
            .update(id, changes)
            .await?
            .ok_or_else(|| user_not_found(id))?;

        info!(user_id = user.id, "User updated");
        Ok(user.into())
    }

    /// Delete a user, returning its public view
    pub async fn delete(store: &dyn UserStore, id: i32) -> Result<UserResponse, ApiError> {
        let user = store.delete(id).await?.ok_or_else(|| user_not_found(id))?;

        info!(user_id = user.id, "User deleted");
        Ok(user.into())
    }

    /// Seed a superadmin unless the email is already registered
    ///
    /// The credentials go through the same constraints as an HTTP create, so
    /// a bad email or weak password fails here instead of producing an
    /// account that can never log in. Returns whether a user was created.
    pub async fn ensure_superadmin(
        store: &dyn UserStore,
        email: &str,
        password: &str,
    ) -> Result<bool, ApiError> {
        let req = CreateUserRequest {
            email: email.to_string(),
            password: password.to_string(),
            role: Role::Superadmin,
        };
        req.validate()?;

        if store.find_by_email(email).await?.is_some() {
            return Ok(false);
        }

        Self::create(store, req).await?;
        Ok(true)
    }
}
