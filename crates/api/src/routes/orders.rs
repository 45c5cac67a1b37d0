//! Order endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use common::EntityId;
use domain::Order;
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::boundary::{FieldValue, required};
use crate::error::ApiError;
use crate::routes::MessageResponse;

// -- Request types --

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    pub product_id: Option<FieldValue>,
    pub client_id: Option<FieldValue>,
    pub quantity: Option<FieldValue>,
    pub status: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
}

// -- Response types --

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderResponse {
    pub message: String,
    pub order_id: EntityId,
    pub order: Order,
}

// -- Handlers --

/// POST /orders — place a new order. Status defaults to PENDING.
#[tracing::instrument(skip(state, req))]
pub async fn place(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PlaceOrderRequest>,
) -> Result<Json<PlaceOrderResponse>, ApiError> {
    let product_id = required(req.product_id, "productId")?.as_long("productId")?;
    let client_id = required(req.client_id, "clientId")?.as_long("clientId")?;
    let quantity = required(req.quantity, "quantity")?.as_int("quantity")?;

    let order = Order::with_status(
        EntityId::new(product_id),
        EntityId::new(client_id),
        quantity,
        req.status.unwrap_or_default(),
    );

    let saved = state.orders.place_order(order).await?;

    Ok(Json(PlaceOrderResponse {
        message: "Order placed successfully".to_string(),
        order_id: saved.id.unwrap_or_default(),
        order: saved,
    }))
}

/// GET /orders — list all orders in insertion order.
#[tracing::instrument(skip(state))]
pub async fn list(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Order>>, ApiError> {
    Ok(Json(state.orders.all_orders().await?))
}

/// GET /orders/:id — load an order by id.
#[tracing::instrument(skip(state))]
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<EntityId>,
) -> Result<Json<Order>, ApiError> {
    let order = state
        .orders
        .get_order(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Order {id} not found")))?;

    Ok(Json(order))
}

/// GET /orders/client/:client_id — orders placed by a client.
#[tracing::instrument(skip(state))]
pub async fn by_client(
    State(state): State<Arc<AppState>>,
    Path(client_id): Path<EntityId>,
) -> Result<Json<Vec<Order>>, ApiError> {
    Ok(Json(state.orders.orders_by_client(client_id).await?))
}

/// GET /orders/product/:product_id — orders referencing a product.
#[tracing::instrument(skip(state))]
pub async fn by_product(
    State(state): State<Arc<AppState>>,
    Path(product_id): Path<EntityId>,
) -> Result<Json<Vec<Order>>, ApiError> {
    Ok(Json(state.orders.orders_by_product(product_id).await?))
}

/// GET /orders/status/:status — orders with an exact status string.
#[tracing::instrument(skip(state))]
pub async fn by_status(
    State(state): State<Arc<AppState>>,
    Path(status): Path<String>,
) -> Result<Json<Vec<Order>>, ApiError> {
    Ok(Json(state.orders.orders_by_status(&status).await?))
}

/// PUT /orders/:id/status — overwrite an order's status.
#[tracing::instrument(skip(state, req))]
pub async fn update_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<EntityId>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<Order>, ApiError> {
    let status = required(req.status, "status")?;

    let order = state
        .orders
        .update_status(id, status)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Order {id} not found")))?;

    Ok(Json(order))
}

/// DELETE /orders/:id — remove an order. Succeeds even if the id never
/// existed; user deletion 404s instead.
#[tracing::instrument(skip(state))]
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<EntityId>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.orders.delete_order(id).await?;
    Ok(Json(MessageResponse::new("Order deleted successfully")))
}
