//! Domain layer for the marketplace backend.
//!
//! Entities ([`User`], [`Product`], [`Order`]) are plain records persisted
//! through the entity store; references between them are soft (ids only,
//! never validated). The services own the lifecycle rules: default-status
//! assignment for orders, the forced active flag on registration, and the
//! plaintext credential check behind [`CredentialVerifier`].

pub mod auth;
pub mod error;
pub mod order;
pub mod product;
pub mod services;
pub mod user;

pub use auth::{CredentialVerifier, PlaintextVerifier};
pub use common::EntityId;
pub use error::{AuthError, DomainError};
pub use order::Order;
pub use product::Product;
pub use services::{OrderService, ProductService, UserService};
pub use user::{Role, User};
