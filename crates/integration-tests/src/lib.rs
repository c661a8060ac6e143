//! Integration tests for Pocketshop.
//!
//! Each test spawns a fresh storefront instance on an ephemeral local port
//! and drives it over HTTP with `reqwest`. A fresh instance starts from the
//! seeded catalog with no users, an empty cart, and no orders, so tests are
//! independent of each other.
//!
//! # Test Categories
//!
//! - `storefront_users` - Registration and login
//! - `storefront_products` - Catalog listing
//! - `storefront_cart` - Cart add/view/remove
//! - `storefront_orders` - Order placement and listing

#![cfg_attr(not(test), forbid(unsafe_code))]

use pocketshop_storefront::config::StorefrontConfig;
use pocketshop_storefront::routes;
use pocketshop_storefront::state::AppState;

/// A running storefront instance plus an HTTP client pointed at it.
pub struct TestContext {
    pub client: reqwest::Client,
    pub base_url: String,
}

impl TestContext {
    /// Spawn a fresh storefront on an ephemeral local port.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound; no test can proceed without it.
    #[allow(clippy::unwrap_used)]
    pub async fn spawn() -> Self {
        let state = AppState::new(StorefrontConfig::for_tests());
        let app = routes::app(state);

        let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0))
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("listener has a local address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            client: reqwest::Client::new(),
            base_url: format!("http://{addr}"),
        }
    }

    /// Build a full URL for an API path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
