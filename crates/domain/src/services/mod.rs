//! Lifecycle services over the entity store.

pub mod orders;
pub mod products;
pub mod users;

pub use orders::OrderService;
pub use products::ProductService;
pub use users::UserService;
