//! Order lifecycle manager.

use std::sync::Arc;

use entity_store::EntityStore;

use crate::error::DomainError;
use crate::order::Order;
use common::EntityId;

/// Owns creation, default-status assignment, status transition, and
/// deletion of orders, plus the per-query lookup views.
///
/// Nothing here checks that an order's product or client actually
/// exists; references stay soft.
#[derive(Clone)]
pub struct OrderService {
    store: Arc<dyn EntityStore<Order>>,
}

impl OrderService {
    /// Creates a new order service over the given store.
    pub fn new(store: Arc<dyn EntityStore<Order>>) -> Self {
        Self { store }
    }

    /// Persists a new order and returns the stored record with its
    /// generated id. An absent or empty status defaults to
    /// [`Order::PENDING`].
    #[tracing::instrument(skip(self, order), fields(client_id = %order.client_id, product_id = %order.product_id))]
    pub async fn place_order(&self, mut order: Order) -> Result<Order, DomainError> {
        if order.status.is_empty() {
            order.status = Order::PENDING.to_string();
        }

        let stored = self.store.create(order).await?;
        metrics::counter!("orders_placed_total").increment(1);
        tracing::info!(order_id = %stored.id.unwrap_or_default(), status = %stored.status, "order placed");
        Ok(stored)
    }

    /// Loads an order by id. Returns None if it doesn't exist.
    #[tracing::instrument(skip(self))]
    pub async fn get_order(&self, id: EntityId) -> Result<Option<Order>, DomainError> {
        Ok(self.store.get(id).await?)
    }

    /// All orders, in insertion order.
    #[tracing::instrument(skip(self))]
    pub async fn all_orders(&self) -> Result<Vec<Order>, DomainError> {
        Ok(self.store.list().await?)
    }

    /// Orders whose clientId equals the argument, insertion order.
    #[tracing::instrument(skip(self))]
    pub async fn orders_by_client(&self, client_id: EntityId) -> Result<Vec<Order>, DomainError> {
        let orders = self.store.list().await?;
        Ok(orders
            .into_iter()
            .filter(|o| o.client_id == client_id)
            .collect())
    }

    /// Orders whose productId equals the argument, insertion order.
    #[tracing::instrument(skip(self))]
    pub async fn orders_by_product(&self, product_id: EntityId) -> Result<Vec<Order>, DomainError> {
        let orders = self.store.list().await?;
        Ok(orders
            .into_iter()
            .filter(|o| o.product_id == product_id)
            .collect())
    }

    /// Orders with the given status, insertion order. Exact string
    /// match; the status field carries no enumeration.
    #[tracing::instrument(skip(self))]
    pub async fn orders_by_status(&self, status: &str) -> Result<Vec<Order>, DomainError> {
        let orders = self.store.list().await?;
        Ok(orders.into_iter().filter(|o| o.status == status).collect())
    }

    /// Overwrites the status of an existing order. Returns None (not an
    /// error) when the order is absent. Any non-empty string is
    /// accepted; no transition graph is enforced.
    #[tracing::instrument(skip(self))]
    pub async fn update_status(
        &self,
        order_id: EntityId,
        status: String,
    ) -> Result<Option<Order>, DomainError> {
        if status.is_empty() {
            return Err(DomainError::Validation {
                field: "status",
                reason: "status must not be empty".to_string(),
            });
        }

        let Some(mut order) = self.store.get(order_id).await? else {
            return Ok(None);
        };

        order.status = status;
        let updated = self.store.update(order).await?;
        metrics::counter!("orders_status_updated_total").increment(1);
        Ok(Some(updated))
    }

    /// Deletes an order. Deleting an id that doesn't exist is a no-op
    /// success; user deletion reports the miss instead.
    #[tracing::instrument(skip(self))]
    pub async fn delete_order(&self, order_id: EntityId) -> Result<(), DomainError> {
        let removed = self.store.delete(order_id).await?;
        if removed {
            metrics::counter!("orders_deleted_total").increment(1);
        }
        Ok(())
    }
}
