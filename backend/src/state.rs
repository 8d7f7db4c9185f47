//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! Everything in here is built once at startup and read-only afterwards.
//! All fields are `Arc`s or internally reference counted, so cloning per
//! request is cheap.

use crate::auth::{JwtService, RoutePolicy};
use crate::config::AppConfig;
use crate::repositories::{
    MemoryProductStore, MemoryUserStore, ProductRepository, ProductStore, UserRepository,
    UserStore,
};
use sqlx::PgPool;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Credential store
    pub users: Arc<dyn UserStore>,
    /// Product store
    pub products: Arc<dyn ProductStore>,
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Pre-initialized JWT service with cached keys
    pub jwt: JwtService,
    /// Route to allowed-roles table
    pub policy: Arc<RoutePolicy>,
}

impl AppState {
    /// Create application state over the given stores
    ///
    /// Derives the JWT keys from the configured secret; call once at startup.
    pub fn new(
        users: Arc<dyn UserStore>,
        products: Arc<dyn ProductStore>,
        config: AppConfig,
    ) -> Self {
        let jwt = JwtService::new(&config.jwt.secret, config.jwt.access_token_expiry_secs);

        Self {
            users,
            products,
            config: Arc::new(config),
            jwt,
            policy: Arc::new(RoutePolicy::inventory()),
        }
    }

    /// State backed by Postgres repositories sharing one pool
    pub fn postgres(pool: PgPool, config: AppConfig) -> Self {
        Self::new(
            Arc::new(UserRepository::new(pool.clone())),
            Arc::new(ProductRepository::new(pool)),
            config,
        )
    }

    /// State backed by empty in-memory stores
    pub fn in_memory(config: AppConfig) -> Self {
        Self::new(
            Arc::new(MemoryUserStore::new()),
            Arc::new(MemoryProductStore::new()),
            config,
        )
    }

    /// Replace the route policy
    pub fn with_policy(mut self, policy: RoutePolicy) -> Self {
        self.policy = Arc::new(policy);
        self
    }

    #[inline]
    pub fn users(&self) -> &dyn UserStore {
        self.users.as_ref()
    }

    #[inline]
    pub fn products(&self) -> &dyn ProductStore {
        self.products.as_ref()
    }

    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[inline]
    pub fn jwt(&self) -> &JwtService {
        &self.jwt
    }

    #[inline]
    pub fn policy(&self) -> &RoutePolicy {
        &self.policy
    }
}
