//! In-memory shop store.
//!
//! All state lives here: the user list, the seeded catalog, the single
//! shared cart, and the order log. Nothing is persisted; a restart resets
//! everything. Handlers reach the store through
//! [`AppState`](crate::state::AppState), which wraps it in a mutex so each
//! read-modify-write runs to completion before the next one starts.

use thiserror::Error;

use pocketshop_core::{
    CartItem, CartView, Order, OrderId, Price, Product, ProductId, User, UserId, total_of,
};

/// Errors surfaced by store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Username/password pair did not match any user.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Product ID not present in the catalog.
    #[error("product {0} not found")]
    ProductNotFound(ProductId),

    /// Cart position outside `[1, len]`.
    #[error("invalid cart position {0}")]
    InvalidPosition(usize),
}

/// The in-memory store backing every endpoint.
///
/// The catalog is fixed after seeding. Users and orders only ever grow, and
/// their IDs are assigned as `current count + 1`. The cart is one global
/// list shared by all callers.
#[derive(Debug)]
pub struct Store {
    users: Vec<User>,
    catalog: Vec<Product>,
    cart: Vec<CartItem>,
    orders: Vec<Order>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Create a store with the standard demo catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::with_catalog(seed_catalog())
    }

    /// Create a store around a specific catalog.
    #[must_use]
    pub const fn with_catalog(catalog: Vec<Product>) -> Self {
        Self {
            users: Vec::new(),
            catalog,
            cart: Vec::new(),
            orders: Vec::new(),
        }
    }

    // =========================================================================
    // User Registry
    // =========================================================================

    /// Register a new user and return the created record.
    ///
    /// Always succeeds: usernames are not checked for uniqueness, and empty
    /// fields are accepted.
    pub fn register(&mut self, username: String, password: String) -> User {
        let user = User {
            id: UserId::new(next_id(self.users.len())),
            username,
            password,
        };
        self.users.push(user.clone());
        user
    }

    /// Authenticate by exact, case-sensitive username/password match.
    ///
    /// Returns a fabricated token derived from the user ID. The token
    /// carries no security guarantee and is never checked by any endpoint.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidCredentials` when no user matches.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<String, StoreError> {
        self.users
            .iter()
            .find(|u| u.username == username && u.password == password)
            .map(|u| format!("dummy-token-{}", u.id))
            .ok_or(StoreError::InvalidCredentials)
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// The full catalog in seed order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.catalog
    }

    // =========================================================================
    // Cart Manager
    // =========================================================================

    /// Append a line for `product_id` to the cart.
    ///
    /// The matched product is copied into the line. Zero and negative
    /// quantities are stored as-is.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ProductNotFound` without mutating the cart when
    /// the product does not exist.
    pub fn add_to_cart(&mut self, product_id: ProductId, quantity: i64) -> Result<(), StoreError> {
        let product = self
            .catalog
            .iter()
            .find(|p| p.id == product_id)
            .cloned()
            .ok_or(StoreError::ProductNotFound(product_id))?;

        self.cart.push(CartItem { product, quantity });
        Ok(())
    }

    /// Current cart contents with the total recomputed fresh.
    #[must_use]
    pub fn view_cart(&self) -> CartView {
        CartView {
            items: self.cart.clone(),
            total: total_of(&self.cart),
        }
    }

    /// Remove the cart line at the 1-based `position`.
    ///
    /// Positions are transient: removing a line shifts everything after it
    /// down by one, so callers must re-fetch the cart between removals.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidPosition` leaving the cart untouched when
    /// `position` is outside `[1, len]`.
    pub fn remove_from_cart(&mut self, position: usize) -> Result<(), StoreError> {
        if position == 0 || position > self.cart.len() {
            return Err(StoreError::InvalidPosition(position));
        }
        self.cart.remove(position - 1);
        Ok(())
    }

    // =========================================================================
    // Order Processor
    // =========================================================================

    /// Convert the current cart into a new order and clear the cart.
    ///
    /// Always succeeds; an empty cart yields an order with no items and
    /// total 0. The total is fixed at creation and never recomputed.
    pub fn place_order(&mut self) -> Order {
        let items = std::mem::take(&mut self.cart);
        let order = Order {
            id: OrderId::new(next_id(self.orders.len())),
            total: total_of(&items),
            items,
        };
        self.orders.push(order.clone());
        order
    }

    /// The full order log in creation order.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }
}

/// Next sequential ID: current record count plus one. IDs are never reused.
fn next_id(count: usize) -> i32 {
    i32::try_from(count + 1).unwrap_or(i32::MAX)
}

/// The fixed demo catalog.
fn seed_catalog() -> Vec<Product> {
    vec![
        Product::new(ProductId::new(1), "T-shirt", Price::from_minor_units(399)),
        Product::new(ProductId::new(2), "Jeans", Price::from_minor_units(1299)),
        Product::new(ProductId::new(3), "Sneakers", Price::from_minor_units(2499)),
    ]
}
