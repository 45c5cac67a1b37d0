pub mod health;
pub mod metrics;
pub mod orders;
pub mod products;
pub mod users;

use serde::Serialize;

/// A `{"message": ...}` response body, used by mutations and errors alike.
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
