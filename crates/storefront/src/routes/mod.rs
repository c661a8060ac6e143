//! HTTP route handlers for the storefront API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health              - Health check
//!
//! # Users
//! POST /users               - Register (always succeeds on a parsable body)
//! POST /users/login         - Login, returns a fabricated token
//!
//! # Catalog
//! GET  /products            - Full product catalog in seed order
//!
//! # Cart
//! GET    /cart              - Cart contents plus running total
//! POST   /cart/add          - Append a line to the shared cart
//! DELETE /cart/remove/{id}  - Remove the line at a 1-based position
//!
//! # Orders
//! POST /orders              - Snapshot the cart into a new order
//! GET  /orders              - Order log in creation order
//!
//! # Static
//! /static/*                 - Demo frontend assets (plain file server)
//! ```

pub mod cart;
pub mod orders;
pub mod products;
pub mod users;

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the user routes router.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(users::register))
        .route("/login", post(users::login))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/remove/{id}", delete(cart::remove))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new().route("/", post(orders::place).get(orders::index))
}

/// Create the full application router, including the static file server.
pub fn app(state: AppState) -> Router {
    let static_dir = state.config().static_dir.clone();

    Router::new()
        .route("/health", get(health))
        .nest("/users", user_routes())
        .route("/products", get(products::index))
        .nest("/cart", cart_routes())
        .nest("/orders", order_routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
async fn health() -> &'static str {
    "ok"
}
