//! In-process stores
//!
//! Same contracts as the Postgres repositories, backed by ordered maps.
//! Selected with `store.backend = "memory"`; state is lost on restart.

use super::{
    NewProduct, NewUser, ProductChanges, ProductRecord, ProductStore, StoreError, StoreResult,
    UserChanges, UserRecord, UserStore,
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Debug)]
struct Table<T> {
    next_id: i32,
    rows: BTreeMap<i32, T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

impl<T> Table<T> {
    fn allocate_id(&mut self) -> i32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// In-memory credential store
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    table: RwLock<Table<UserRecord>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, user: NewUser) -> StoreResult<UserRecord> {
        let mut table = self.table.write().await;

        if table.rows.values().any(|u| u.email == user.email) {
            return Err(StoreError::Conflict("Email already registered".to_string()));
        }

        let record = UserRecord {
            id: table.allocate_id(),
            email: user.email,
            password_hash: user.password_hash,
            role: user.role,
        };
        table.rows.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<UserRecord>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<UserRecord>> {
        let table = self.table.read().await;
        Ok(table.rows.values().find(|u| u.email == email).cloned())
    }

    async fn list(&self) -> StoreResult<Vec<UserRecord>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn update(&self, id: i32, changes: UserChanges) -> StoreResult<Option<UserRecord>> {
        let mut table = self.table.write().await;

        if let Some(email) = &changes.email {
            if table
                .rows
                .values()
                .any(|u| u.id != id && &u.email == email)
            {
                return Err(StoreError::Conflict("Email already registered".to_string()));
            }
        }

        let Some(record) = table.rows.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(email) = changes.email {
            record.email = email;
        }
        if let Some(password_hash) = changes.password_hash {
            record.password_hash = password_hash;
        }
        if let Some(role) = changes.role {
            record.role = role;
        }
        Ok(Some(record.clone()))
    }

    async fn delete(&self, id: i32) -> StoreResult<Option<UserRecord>> {
        Ok(self.table.write().await.rows.remove(&id))
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }
}

/// In-memory product store
#[derive(Debug, Default)]
pub struct MemoryProductStore {
    table: RwLock<Table<ProductRecord>>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn create(&self, product: NewProduct) -> StoreResult<ProductRecord> {
        let mut table = self.table.write().await;
        let record = ProductRecord {
            id: table.allocate_id(),
            nombre: product.nombre,
            descripcion: product.descripcion,
            precio: product.precio,
            cantidad: product.cantidad,
        };
        table.rows.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<ProductRecord>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn list(&self) -> StoreResult<Vec<ProductRecord>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn update(
        &self,
        id: i32,
        changes: ProductChanges,
    ) -> StoreResult<Option<ProductRecord>> {
        let mut table = self.table.write().await;
        let Some(record) = table.rows.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(nombre) = changes.nombre {
            record.nombre = nombre;
        }
        if let Some(descripcion) = changes.descripcion {
            record.descripcion = descripcion;
        }
        if let Some(precio) = changes.precio {
            record.precio = precio;
        }
        if let Some(cantidad) = changes.cantidad {
            record.cantidad = cantidad;
        }
        Ok(Some(record.clone()))
    }

    async fn delete(&self, id: i32) -> StoreResult<Option<ProductRecord>> {
        Ok(self.table.write().await.rows.remove(&id))
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }
}
