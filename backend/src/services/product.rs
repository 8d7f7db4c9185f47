//! Product service

use crate::error::ApiError;
use crate::repositories::{NewProduct, ProductChanges, ProductRecord, ProductStore};
use inventory_shared::{CreateProductRequest, ProductResponse, UpdateProductRequest};
use tracing::info;

impl From<ProductRecord> for ProductResponse {
    fn from(record: ProductRecord) -> Self {
        ProductResponse {
            id: record.id,
            nombre: record.nombre,
            descripcion: record.descripcion,
            precio: record.precio,
            cantidad: record.cantidad,
        }
    }
}

fn product_not_found(id: i32) -> ApiError {
    ApiError::NotFound(format!("No product with id {}", id))
}

/// Product service
pub struct ProductService;

impl ProductService {
    pub async fn create(
        store: &dyn ProductStore,
        req: CreateProductRequest,
    ) -> Result<ProductResponse, ApiError> {
        let product = store
            .create(NewProduct {
                nombre: req.nombre,
                descripcion: req.descripcion,
                precio: req.precio,
                cantidad: req.cantidad,
            })
            .await?;

        info!(product_id = product.id, "Product created");
        Ok(product.into())
    }

    pub async fn list(store: &dyn ProductStore) -> Result<Vec<ProductResponse>, ApiError> {
        let products = store.list().await?;
        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    pub async fn get(store: &dyn ProductStore, id: i32) -> Result<ProductResponse, ApiError> {
        store
            .find_by_id(id)
            .await?
            .map(ProductResponse::from)
            .ok_or_else(|| product_not_found(id))
    }

    pub async fn update(
        store: &dyn ProductStore,
        id: i32,
        req: UpdateProductRequest,
    ) -> Result<ProductResponse, ApiError> {
        let changes = ProductChanges {
            nombre: req.nombre,
            descripcion: req.descripcion,
            precio: req.precio,
            cantidad: req.cantidad,
        };

        let product = store
            .update(id, changes)
            .await?
            .ok_or_else(|| product_not_found(id))?;

        info!(product_id = product.id, "Product updated");
        Ok(product.into())
    }

    pub async fn delete(store: &dyn ProductStore, id: i32) -> Result<ProductResponse, ApiError> {
        let product = store
            .delete(id)
            .await?
            .ok_or_else(|| product_not_found(id))?;

        info!(product_id = product.id, "Product deleted");
        Ok(product.into())
    }
}
