//! Product API routes

use crate::error::ApiResult;
use crate::routes::{
    extract::{IdPath, ValidatedJson},
    paths,
};
use crate::services::ProductService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use inventory_shared::{CreateProductRequest, ProductResponse, UpdateProductRequest};

/// Create product routes
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route(paths::PRODUCTS, get(list_products).post(create_product))
        .route(
            paths::PRODUCT_BY_ID,
            get(get_product).patch(update_product).delete(delete_product),
        )
}

/// POST /api/v1/products
async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateProductRequest>,
) -> ApiResult<(StatusCode, Json<ProductResponse>)> {
    let product = ProductService::create(state.products(), req).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /api/v1/products
async fn list_products(State(state): State<AppState>) -> ApiResult<Json<Vec<ProductResponse>>> {
    let products = ProductService::list(state.products()).await?;
    Ok(Json(products))
}

/// GET /api/v1/products/:id
async fn get_product(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<ProductResponse>> {
    let product = ProductService::get(state.products(), id).await?;
    Ok(Json(product))
}

/// PATCH /api/v1/products/:id
async fn update_product(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(req): ValidatedJson<UpdateProductRequest>,
) -> ApiResult<Json<ProductResponse>> {
    let product = ProductService::update(state.products(), id, req).await?;
    Ok(Json(product))
}

/// DELETE /api/v1/products/:id
async fn delete_product(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<ProductResponse>> {
    let product = ProductService::delete(state.products(), id).await?;
    Ok(Json(product))
}
