//! Product endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use common::EntityId;
use domain::Product;
use serde::Deserialize;

use crate::AppState;
use crate::boundary::{FieldValue, required};
use crate::error::ApiError;
use crate::routes::MessageResponse;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<FieldValue>,
    pub stock: Option<FieldValue>,
    pub owner_id: Option<FieldValue>,
}

/// POST /products — add a product to the catalog.
#[tracing::instrument(skip(state, req))]
pub async fn add(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddProductRequest>,
) -> Result<Json<Product>, ApiError> {
    let name = required(req.name, "name")?;
    let price = required(req.price, "price")?.as_double("price")?;
    let stock = required(req.stock, "stock")?.as_int("stock")?;
    let owner_id = required(req.owner_id, "ownerId")?.as_long("ownerId")?;

    let product = Product {
        id: None,
        name,
        description: req.description,
        price,
        stock,
        owner_id: EntityId::new(owner_id),
    };

    let saved = state.products.add_product(product).await?;
    Ok(Json(saved))
}

/// GET /products — list all products in insertion order.
#[tracing::instrument(skip(state))]
pub async fn list(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(state.products.all_products().await?))
}

/// GET /products/owner/:owner_id — products listed by an owner.
#[tracing::instrument(skip(state))]
pub async fn by_owner(
    State(state): State<Arc<AppState>>,
    Path(owner_id): Path<EntityId>,
) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(state.products.products_by_owner(owner_id).await?))
}

/// DELETE /products/:id — remove a product. A missing id is a no-op
/// success, and existing orders keep their (soft) reference to it.
#[tracing::instrument(skip(state))]
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<EntityId>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.products.delete_product(id).await?;
    Ok(Json(MessageResponse::new("Product deleted successfully")))
}
