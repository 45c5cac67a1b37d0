//! User registration, lookup, and login.

use std::sync::Arc;

use entity_store::{Entity, EntityStore};

use crate::auth::CredentialVerifier;
use crate::error::{AuthError, DomainError};
use crate::user::{Role, User};
use common::EntityId;

/// Service for managing users.
///
/// The store enforces no email uniqueness; registering the same email
/// twice creates two users, and [`UserService::find_by_email`] returns
/// the earliest-registered match.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn EntityStore<User>>,
    verifier: Arc<dyn CredentialVerifier>,
}

impl UserService {
    /// Creates a new user service over the given store and credential
    /// verifier.
    pub fn new(store: Arc<dyn EntityStore<User>>, verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self { store, verifier }
    }

    /// Registers a user. The active flag is forced to true no matter
    /// what the caller set.
    #[tracing::instrument(skip(self, user), fields(email = %user.email))]
    pub async fn register(&self, mut user: User) -> Result<User, DomainError> {
        user.active = true;
        let stored = self.store.create(user).await?;
        metrics::counter!("users_registered_total").increment(1);
        tracing::info!(user_id = %stored.id.unwrap_or_default(), "user registered");
        Ok(stored)
    }

    /// Loads a user by id. Returns None if absent.
    #[tracing::instrument(skip(self))]
    pub async fn find_by_id(&self, id: EntityId) -> Result<Option<User>, DomainError> {
        Ok(self.store.get(id).await?)
    }

    /// Exact-match email lookup. At most one result is expected but not
    /// enforced; the first match in insertion order wins.
    #[tracing::instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.store.list().await?;
        Ok(users.into_iter().find(|u| u.email == email))
    }

    /// All users, in insertion order.
    #[tracing::instrument(skip(self))]
    pub async fn all_users(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.store.list().await?)
    }

    /// Users with the given role, insertion order.
    #[tracing::instrument(skip(self))]
    pub async fn find_by_role(&self, role: Role) -> Result<Vec<User>, DomainError> {
        let users = self.store.list().await?;
        Ok(users.into_iter().filter(|u| u.role == role).collect())
    }

    /// Users filtered by the active flag, insertion order.
    #[tracing::instrument(skip(self))]
    pub async fn find_by_active(&self, active: bool) -> Result<Vec<User>, DomainError> {
        let users = self.store.list().await?;
        Ok(users.into_iter().filter(|u| u.active == active).collect())
    }

    /// Whether a user with this id exists.
    #[tracing::instrument(skip(self))]
    pub async fn exists(&self, id: EntityId) -> Result<bool, DomainError> {
        Ok(self.store.exists(id).await?)
    }

    /// Checks credentials and returns the user on success.
    ///
    /// Failure ladder: unknown email, then password mismatch (both
    /// 401-class, distinct messages), then inactive account (403-class).
    #[tracing::instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<User, DomainError> {
        let Some(user) = self.find_by_email(email).await? else {
            metrics::counter!("logins_failed_total").increment(1);
            return Err(AuthError::UnknownUser.into());
        };

        if !self.verifier.verify(password, &user.password) {
            metrics::counter!("logins_failed_total").increment(1);
            return Err(AuthError::InvalidPassword.into());
        }

        if !user.active {
            metrics::counter!("logins_failed_total").increment(1);
            return Err(AuthError::Inactive.into());
        }

        metrics::counter!("logins_total").increment(1);
        Ok(user)
    }

    /// Full overwrite keyed by id. Partial-update merging happens at the
    /// request boundary, which loads the user, applies the provided
    /// fields, and hands the whole record back here.
    #[tracing::instrument(skip(self, user), fields(user_id = ?user.id))]
    pub async fn update_user(&self, user: User) -> Result<User, DomainError> {
        Ok(self.store.update(user).await?)
    }

    /// Deletes a user. Unlike orders, deleting a missing user is an
    /// error.
    #[tracing::instrument(skip(self))]
    pub async fn delete_user(&self, id: EntityId) -> Result<(), DomainError> {
        let removed = self.store.delete(id).await?;
        if !removed {
            return Err(DomainError::NotFound {
                kind: User::KIND,
                id,
            });
        }
        Ok(())
    }
}
