use serde::Serialize;
use serde::de::DeserializeOwned;

use common::EntityId;

/// A record type that can be persisted by an [`crate::EntityStore`].
///
/// An entity starts life without an id; the store assigns one on `create`
/// and the id is immutable from then on.
pub trait Entity: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Storage key namespace for this entity type. Id sequences are
    /// maintained per kind.
    const KIND: &'static str;

    /// The assigned id, if the entity has been persisted.
    fn id(&self) -> Option<EntityId>;

    /// Attaches the store-assigned id.
    fn set_id(&mut self, id: EntityId);
}
