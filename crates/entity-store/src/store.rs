use async_trait::async_trait;

use crate::{Entity, EntityId, Result};

/// Storage contract shared by the in-memory and PostgreSQL backends.
///
/// Ids are assigned by the store from a monotonic sequence per entity
/// kind and are never reused after deletion. The store enforces no
/// uniqueness constraint beyond the id itself; callers that care about
/// duplicate emails and the like must check first.
#[async_trait]
pub trait EntityStore<E: Entity>: Send + Sync {
    /// Persists a new entity, assigning the next id in the sequence.
    /// Returns the stored record carrying its generated id.
    async fn create(&self, entity: E) -> Result<E>;

    /// Fetches an entity by id.
    async fn get(&self, id: EntityId) -> Result<Option<E>>;

    /// Returns all entities in ascending id order, which is insertion
    /// order given the monotonic sequence.
    async fn list(&self) -> Result<Vec<E>>;

    /// Full overwrite keyed by the entity's id (last-write-wins).
    /// Fails with [`crate::StoreError::MissingId`] if the entity has
    /// never been persisted.
    async fn update(&self, entity: E) -> Result<E>;

    /// Removes the record if present. Returns whether anything was
    /// deleted; whether a miss is an error is the caller's policy.
    async fn delete(&self, id: EntityId) -> Result<bool>;

    /// Whether a record with this id exists.
    async fn exists(&self, id: EntityId) -> Result<bool> {
        Ok(self.get(id).await?.is_some())
    }
}
