//! Durable key-value storage for marketplace entities.
//!
//! Every record type implements [`Entity`]; the [`EntityStore`] trait
//! provides create/get/list/update/delete with store-assigned monotonic
//! ids, backed by either memory ([`MemoryStore`]) or PostgreSQL
//! ([`PostgresStore`]).

pub mod entity;
pub mod error;
pub mod memory;
pub mod postgres;
pub mod store;

pub use common::EntityId;
pub use entity::Entity;
pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use postgres::PostgresStore;
pub use store::EntityStore;
