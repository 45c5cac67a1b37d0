//! User entity and marketplace roles.

use serde::{Deserialize, Serialize};

use common::EntityId;
use entity_store::Entity;

/// Category of marketplace participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Buys products.
    Client,
    /// Lists products for sale.
    Producer,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Client => write!(f, "CLIENT"),
            Role::Producer => write!(f, "PRODUCER"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CLIENT" => Ok(Role::Client),
            "PRODUCER" => Ok(Role::Producer),
            other => Err(format!("unknown role `{other}`")),
        }
    }
}

/// A registered marketplace user.
///
/// The email is intended to be unique but nothing enforces it; the
/// password is stored and compared as plain text via
/// [`crate::PlaintextVerifier`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: Option<EntityId>,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub active: bool,
}

impl User {
    /// A new user awaiting registration. Registration forces `active`
    /// to true regardless of what is passed here.
    pub fn new(name: impl Into<String>, email: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            password: password.into(),
            role,
            active: true,
        }
    }
}

impl Entity for User {
    const KIND: &'static str = "user";

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }
}
