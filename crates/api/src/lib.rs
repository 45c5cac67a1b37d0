//! HTTP API server for the marketplace backend.
//!
//! Routes users, products, and orders to their services, with
//! structured logging (tracing) and Prometheus metrics.

pub mod boundary;
pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{delete, get, post, put};
use domain::{Order, OrderService, PlaintextVerifier, Product, ProductService, User, UserService};
use entity_store::{EntityStore, MemoryStore, PostgresStore};
use metrics_exporter_prometheus::PrometheusHandle;
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub users: UserService,
    pub products: ProductService,
    pub orders: OrderService,
}

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/orders", post(routes::orders::place))
        .route("/orders", get(routes::orders::list))
        .route("/orders/{id}", get(routes::orders::get))
        .route("/orders/{id}", delete(routes::orders::delete))
        .route("/orders/{id}/status", put(routes::orders::update_status))
        .route("/orders/client/{client_id}", get(routes::orders::by_client))
        .route(
            "/orders/product/{product_id}",
            get(routes::orders::by_product),
        )
        .route("/orders/status/{status}", get(routes::orders::by_status))
        .route("/products", post(routes::products::add))
        .route("/products", get(routes::products::list))
        .route("/products/{id}", delete(routes::products::delete))
        .route(
            "/products/owner/{owner_id}",
            get(routes::products::by_owner),
        )
        .route("/users", get(routes::users::list))
        .route("/users/register", post(routes::users::register))
        .route("/users/login", post(routes::users::login))
        .route("/users/{id}", get(routes::users::get))
        .route("/users/{id}", put(routes::users::update))
        .route("/users/{id}", delete(routes::users::delete))
        .route("/users/role/{role}", get(routes::users::by_role))
        .route("/users/active/{flag}", get(routes::users::by_active))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates application state backed by in-memory stores.
pub fn create_default_state() -> Arc<AppState> {
    Arc::new(AppState {
        users: UserService::new(
            Arc::new(MemoryStore::<User>::new()),
            Arc::new(PlaintextVerifier),
        ),
        products: ProductService::new(Arc::new(MemoryStore::<Product>::new())),
        orders: OrderService::new(Arc::new(MemoryStore::<Order>::new())),
    })
}

/// Creates application state backed by PostgreSQL.
///
/// All three entity kinds share the pool; each service gets its own
/// typed store view over it.
pub fn create_postgres_state(pool: PgPool) -> Arc<AppState> {
    let users: Arc<dyn EntityStore<User>> = Arc::new(PostgresStore::new(pool.clone()));
    let products: Arc<dyn EntityStore<Product>> = Arc::new(PostgresStore::new(pool.clone()));
    let orders: Arc<dyn EntityStore<Order>> = Arc::new(PostgresStore::new(pool));

    Arc::new(AppState {
        users: UserService::new(users, Arc::new(PlaintextVerifier)),
        products: ProductService::new(products),
        orders: OrderService::new(orders),
    })
}
