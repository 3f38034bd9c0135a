//! Product CRUD handlers. Each call is a single self-contained unit of work
//! against the store; write failures propagate as generic server errors.

use crate::error::AppError;
use crate::model::Product;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

/// GET /api/products
#[utoipa::path(
    get,
    path = "/api/products",
    responses((status = 200, description = "All products ordered by name", body = [Product]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Product>>, AppError> {
    let products = state.store.list().await?;
    Ok(Json(products))
}

/// GET /api/products/{id}
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "The matching product", body = Product),
        (status = 404, description = "No product with this id")
    )
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Product>, AppError> {
    let product = state
        .store
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound(id))?;
    Ok(Json(product))
}

/// POST /api/products. The caller supplies the id; a duplicate surfaces as a
/// write failure from the primary key.
#[utoipa::path(
    post,
    path = "/api/products",
    request_body = Product,
    responses(
        (status = 201, description = "Created", body = Product,
         headers(("Location" = String, description = "URL of the created product")))
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Json(product): Json<Product>,
) -> Result<impl IntoResponse, AppError> {
    let created = state.store.insert(&product).await?;
    let location = format!("/api/products/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// PUT /api/products. Full replacement keyed by the id in the body. Echoes the
/// input with 200 even when no row matched (update-of-nothing is a no-op).
#[utoipa::path(
    put,
    path = "/api/products",
    request_body = Product,
    responses((status = 200, description = "Echoed product", body = Product))
)]
pub async fn update(
    State(state): State<AppState>,
    Json(product): Json<Product>,
) -> Result<Json<Product>, AppError> {
    let rows = state.store.replace(&product).await?;
    if rows == 0 {
        tracing::debug!(id = product.id, "update matched no rows");
    }
    Ok(Json(product))
}

/// DELETE /api/products/{id}. 200 with empty body whether or not a row
/// existed, so the call is idempotent.
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(("id" = i32, Path, description = "Product id")),
    responses((status = 200, description = "Deleted (or already absent)"))
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state.store.remove(id).await?;
    Ok(StatusCode::OK)
}
