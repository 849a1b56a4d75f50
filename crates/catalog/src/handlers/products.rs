//! Product CRUD handlers.
//!
//! Bodies are taken as raw JSON and checked by `validate_product_body`, so
//! malformed or incomplete bodies get the same 422 shape as invalid values.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use catalog_core::product::{validate_product_body, FieldError, ProductData, ValidationError};
use catalog_core::storage::RepositoryError;

use crate::{auth::AuthenticatedUser, handlers::AppError, state::AppState};

fn not_found(id: &str) -> RepositoryError {
    RepositoryError::NotFound {
        entity_type: "Product",
        id: id.to_string(),
    }
}

fn product_data(body: Result<Json<Value>, JsonRejection>) -> Result<ProductData, ValidationError> {
    let Json(body) = body.map_err(|rejection| {
        ValidationError::single("reqBody", FieldError::new(rejection.body_text()))
    })?;
    validate_product_body(&body)
}

/// Query parameters for listing products.
#[derive(Debug, Deserialize)]
pub struct ListProductsQuery {
    /// Page size. Without it the whole catalog is returned at once.
    pub limit: Option<usize>,
    /// `nextCursor` of the previous page. Empty means the first page.
    pub cursor: Option<String>,
}

/// GET /products - List all products, or one page of them when `limit` is set.
pub async fn list_products(
    _user: AuthenticatedUser,
    State(state): State<AppState>,
    query: Result<Query<ListProductsQuery>, QueryRejection>,
) -> Result<Json<Value>, AppError> {
    let Query(query) = query.map_err(|rejection| {
        ValidationError::single("reqQuery", FieldError::new(rejection.body_text()))
    })?;

    let Some(limit) = query.limit else {
        let products = state.products.list_products().await?;
        return Ok(Json(json!({ "products": products })));
    };

    if limit == 0 {
        return Err(ValidationError::single(
            "reqQuery.limit",
            FieldError::new("limit must be greater than 0").with_value(json!(limit)),
        )
        .into());
    }

    let cursor = query.cursor.as_deref().filter(|cursor| !cursor.is_empty());
    let page = state.products.list_page(limit, cursor).await?;

    Ok(Json(json!({
        "products": page.products,
        "nextCursor": page.next_cursor,
    })))
}

/// POST /product - Create a new product.
pub async fn create_product(
    AuthenticatedUser(claims): AuthenticatedUser,
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let data = product_data(body)?;
    let product = state.products.create(&data).await?;

    tracing::info!(product_id = %product.id, user = %claims.uuid, "Created product");

    Ok((StatusCode::CREATED, Json(json!({ "product": product }))))
}

/// GET /product/{id} - Get a single product.
pub async fn get_product(
    _user: AuthenticatedUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let product = state
        .products
        .get_product(&id)
        .await?
        .ok_or_else(|| not_found(&id))?;

    Ok(Json(json!({ "product": product })))
}

/// PUT /product/{id} - Replace a product's name, description and price.
pub async fn update_product(
    AuthenticatedUser(claims): AuthenticatedUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let data = product_data(body)?;
    let product = state
        .products
        .update(&id, &data)
        .await?
        .ok_or_else(|| not_found(&id))?;

    tracing::info!(product_id = %product.id, user = %claims.uuid, "Updated product");

    Ok(Json(json!({ "product": product })))
}

/// DELETE /product/{id} - Delete a product.
pub async fn delete_product(
    AuthenticatedUser(claims): AuthenticatedUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if !state.products.delete(&id).await? {
        return Err(not_found(&id).into());
    }

    tracing::info!(product_id = %id, user = %claims.uuid, "Deleted product");

    Ok(StatusCode::NO_CONTENT)
}
