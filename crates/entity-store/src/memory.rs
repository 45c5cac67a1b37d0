use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{Entity, EntityId, Result, StoreError, store::EntityStore};

/// In-memory entity store.
///
/// The default backend; also what the test suites run against. Records
/// live in a `BTreeMap` keyed by id, so iteration order is ascending id
/// order. The id sequence is an atomic counter, which keeps id
/// assignment unique under concurrent creates.
pub struct MemoryStore<E> {
    records: Arc<RwLock<BTreeMap<EntityId, E>>>,
    sequence: Arc<AtomicI64>,
}

impl<E> Clone for MemoryStore<E> {
    fn clone(&self) -> Self {
        Self {
            records: self.records.clone(),
            sequence: self.sequence.clone(),
        }
    }
}

impl<E> Default for MemoryStore<E> {
    fn default() -> Self {
        Self {
            records: Arc::new(RwLock::new(BTreeMap::new())),
            sequence: Arc::new(AtomicI64::new(0)),
        }
    }
}

impl<E> MemoryStore<E> {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of records stored.
    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }

    /// Clears all records. The id sequence keeps advancing, so ids are
    /// not reused even after a clear.
    pub async fn clear(&self) {
        self.records.write().await.clear();
    }
}

#[async_trait]
impl<E: Entity> EntityStore<E> for MemoryStore<E> {
    async fn create(&self, mut entity: E) -> Result<E> {
        let id = EntityId::new(self.sequence.fetch_add(1, Ordering::SeqCst) + 1);
        entity.set_id(id);

        let mut records = self.records.write().await;
        records.insert(id, entity.clone());
        Ok(entity)
    }

    async fn get(&self, id: EntityId) -> Result<Option<E>> {
        let records = self.records.read().await;
        Ok(records.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<E>> {
        let records = self.records.read().await;
        Ok(records.values().cloned().collect())
    }

    async fn update(&self, entity: E) -> Result<E> {
        let id = entity.id().ok_or(StoreError::MissingId { kind: E::KIND })?;

        let mut records = self.records.write().await;
        records.insert(id, entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: EntityId) -> Result<bool> {
        let mut records = self.records.write().await;
        Ok(records.remove(&id).is_some())
    }
}
