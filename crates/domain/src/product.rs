//! Product entity.

use serde::{Deserialize, Serialize};

use common::EntityId;
use entity_store::Entity;

/// A product listed by a producer.
///
/// `owner_id` is a soft reference to a [`crate::User`]; deleting the
/// owner does not cascade to the product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default)]
    pub id: Option<EntityId>,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub owner_id: EntityId,
}

impl Entity for Product {
    const KIND: &'static str = "product";

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }
}
