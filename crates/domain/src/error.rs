//! Domain error types.

use entity_store::StoreError;
use thiserror::Error;

use common::EntityId;

/// Errors that can occur during domain operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// An error occurred in the entity store.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// An input field was missing or unparseable.
    #[error("invalid value for field `{field}`: {reason}")]
    Validation { field: &'static str, reason: String },

    /// The referenced entity does not exist.
    #[error("{kind} with id {id} not found")]
    NotFound { kind: &'static str, id: EntityId },

    /// A login attempt failed.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// Login failures, surfaced with distinct HTTP statuses at the boundary.
///
/// Unknown email and bad password are both 401 and differ only in
/// message text; an inactive account is 403.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("User not found")]
    UnknownUser,

    #[error("Invalid password")]
    InvalidPassword,

    #[error("Account not activated")]
    Inactive,
}
