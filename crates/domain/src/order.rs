//! Order entity.

use serde::{Deserialize, Serialize};

use common::EntityId;
use entity_store::Entity;

/// An order placed by a client for a product.
///
/// `product_id` and `client_id` are soft references: nothing validates
/// that they point at existing records, and deleting the product or the
/// client leaves the order untouched.
///
/// `status` is a free-form string. `PENDING` → `CONFIRMED` → `SHIPPED`
/// is the conventional path, but no transition graph is enforced; the
/// only invariant is that a persisted status is never empty (placement
/// defaults it to [`Order::PENDING`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default)]
    pub id: Option<EntityId>,
    pub product_id: EntityId,
    pub client_id: EntityId,
    pub quantity: i32,
    pub status: String,
}

impl Order {
    /// Conventional status values. Not an enumeration: any non-empty
    /// string is a valid status at the data layer.
    pub const PENDING: &'static str = "PENDING";
    pub const CONFIRMED: &'static str = "CONFIRMED";
    pub const SHIPPED: &'static str = "SHIPPED";

    /// A new order awaiting placement, with no status set.
    pub fn new(product_id: EntityId, client_id: EntityId, quantity: i32) -> Self {
        Self {
            id: None,
            product_id,
            client_id,
            quantity,
            status: String::new(),
        }
    }

    /// Same, with an explicit initial status.
    pub fn with_status(
        product_id: EntityId,
        client_id: EntityId,
        quantity: i32,
        status: impl Into<String>,
    ) -> Self {
        Self {
            status: status.into(),
            ..Self::new(product_id, client_id, quantity)
        }
    }
}

impl Entity for Order {
    const KIND: &'static str = "order";

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }
}
