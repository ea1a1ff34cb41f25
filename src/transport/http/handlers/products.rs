use crate::domain::error::ApiError;
use crate::domain::product::Product;
use crate::transport::http::types::{AppState, ErrorBody, NewProduct, ProductPatch};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value as JsonValue;

#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "Full product catalog in insertion order", body = [Product])
    )
)]
pub async fn list_products_handler(State(state): State<AppState>) -> impl IntoResponse {
    let products = state.products.read().await;
    Json(products.list())
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = String, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "Unknown product id", body = ErrorBody)
    )
)]
pub async fn get_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let products = state.products.read().await;
    products
        .get(&id)
        .map(Json)
        .ok_or_else(ApiError::product_not_found)
}

#[utoipa::path(
    post,
    path = "/api/products",
    request_body = NewProduct,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Missing required fields", body = ErrorBody)
    )
)]
pub async fn create_product_handler(
    State(state): State<AppState>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) =
        body.map_err(|_| ApiError::MissingFields(ApiError::MISSING_PRODUCT_FIELDS))?;
    let product = Product::create(&body)?;

    let mut products = state.products.write().await;
    let stored = products.insert(product);
    tracing::debug!(id = %stored.id, "product created");
    Ok((StatusCode::CREATED, Json(stored)))
}

#[utoipa::path(
    patch,
    path = "/api/products/{id}",
    params(
        ("id" = String, Path, description = "Product id")
    ),
    request_body = ProductPatch,
    responses(
        (status = 200, description = "Updated product", body = Product),
        (status = 404, description = "Unknown product id", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub async fn update_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Result<Json<Product>, ApiError> {
    let mut products = state.products.write().await;
    let mut product = products.get(&id).ok_or_else(ApiError::product_not_found)?;

    let Json(body) =
        body.map_err(|_| ApiError::MissingFields(ApiError::MISSING_PRODUCT_FIELDS))?;
    product.apply_patch(&body)?;

    let updated = products
        .update(&id, move |p| *p = product)
        .ok_or_else(ApiError::product_not_found)?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(
        ("id" = String, Path, description = "Product id")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Unknown product id", body = ErrorBody)
    )
)]
pub async fn delete_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let mut products = state.products.write().await;
    if products.remove(&id) {
        tracing::debug!(%id, "product deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::product_not_found())
    }
}
