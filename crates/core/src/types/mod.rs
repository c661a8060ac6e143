//! Core types for Pocketshop.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod id;
pub mod order;
pub mod price;
pub mod product;
pub mod user;

pub use cart::{CartItem, CartView, total_of};
pub use id::*;
pub use order::Order;
pub use price::Price;
pub use product::Product;
pub use user::User;
