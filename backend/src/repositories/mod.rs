//! Data repositories
//!
//! The services talk to the stores through the [`UserStore`] and
//! [`ProductStore`] traits. Two backends implement them: Postgres via sqlx
//! and an in-process map used for tests and local runs.

pub mod memory;
pub mod product;
pub mod user;

use async_trait::async_trait;
use inventory_shared::Role;
use thiserror::Error;

pub use memory::{MemoryProductStore, MemoryUserStore};
pub use product::ProductRepository;
pub use user::UserRepository;

/// Store failures that services need to tell apart
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique field already holds this value
    #[error("{0}")]
    Conflict(String),

    /// A stored row could not be mapped back to a record
    #[error("Corrupt record: {0}")]
    Corrupt(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// User record as persisted
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Input for creating a user; the password is already hashed
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Input for updating a user; `None` leaves the column untouched
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<Role>,
}

/// Product record as persisted
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub id: i32,
    pub nombre: String,
    pub descripcion: String,
    pub precio: f64,
    pub cantidad: i32,
}

/// Input for creating a product
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub nombre: String,
    pub descripcion: String,
    pub precio: f64,
    pub cantidad: i32,
}

/// Input for updating a product; `None` leaves the column untouched
#[derive(Debug, Clone, Default)]
pub struct ProductChanges {
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
    pub precio: Option<f64>,
    pub cantidad: Option<i32>,
}

/// Credential store
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a user; fails with [`StoreError::Conflict`] on a taken email
    async fn create(&self, user: NewUser) -> StoreResult<UserRecord>;

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<UserRecord>>;

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<UserRecord>>;

    /// All users ordered by id
    async fn list(&self) -> StoreResult<Vec<UserRecord>>;

    /// Apply changes; `Ok(None)` when the id does not exist
    async fn update(&self, id: i32, changes: UserChanges) -> StoreResult<Option<UserRecord>>;

    /// Remove and return the user; `Ok(None)` when the id does not exist
    async fn delete(&self, id: i32) -> StoreResult<Option<UserRecord>>;

    async fn health_check(&self) -> StoreResult<()>;
}

/// Product store
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn create(&self, product: NewProduct) -> StoreResult<ProductRecord>;

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<ProductRecord>>;

    /// All products ordered by id
    async fn list(&self) -> StoreResult<Vec<ProductRecord>>;

    async fn update(&self, id: i32, changes: ProductChanges)
        -> StoreResult<Option<ProductRecord>>;

    async fn delete(&self, id: i32) -> StoreResult<Option<ProductRecord>>;

    async fn health_check(&self) -> StoreResult<()>;
}
