//! Product repository for database operations

use super::{NewProduct, ProductChanges, ProductRecord, ProductStore, StoreResult};
use crate::db;
use async_trait::async_trait;
use sqlx::PgPool;

/// Row shape of the `products` table
#[derive(Debug, Clone, sqlx::FromRow)]
struct ProductRow {
    id: i32,
    nombre: String,
    descripcion: String,
    precio: f64,
    cantidad: i32,
}

impl From<ProductRow> for ProductRecord {
    fn from(row: ProductRow) -> Self {
        ProductRecord {
            id: row.id,
            nombre: row.nombre,
            descripcion: row.descripcion,
            precio: row.precio,
            cantidad: row.cantidad,
        }
    }
}

/// Postgres-backed product store
#[derive(Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for ProductRepository {
    async fn create(&self, product: NewProduct) -> StoreResult<ProductRecord> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            INSERT INTO products (nombre, descripcion, precio, cantidad)
            VALUES ($1, $2, $3, $4)
            RETURNING id, nombre, descripcion, precio, cantidad
            "#,
        )
        .bind(&product.nombre)
        .bind(&product.descripcion)
        .bind(product.precio)
        .bind(product.cantidad)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<ProductRecord>> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, nombre, descripcion, precio, cantidad
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list(&self) -> StoreResult<Vec<ProductRecord>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, nombre, descripcion, precio, cantidad
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(
        &self,
        id: i32,
        changes: ProductChanges,
    ) -> StoreResult<Option<ProductRecord>> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            UPDATE products SET
                nombre = COALESCE($2, nombre),
                descripcion = COALESCE($3, descripcion),
                precio = COALESCE($4, precio),
                cantidad = COALESCE($5, cantidad),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, nombre, descripcion, precio, cantidad
            "#,
        )
        .bind(id)
        .bind(changes.nombre)
        .bind(changes.descripcion)
        .bind(changes.precio)
        .bind(changes.cantidad)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: i32) -> StoreResult<Option<ProductRecord>> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            DELETE FROM products
            WHERE id = $1
            RETURNING id, nombre, descripcion, precio, cantidad
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(db::health_check(&self.pool).await?)
    }
}
