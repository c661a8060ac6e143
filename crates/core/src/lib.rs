//! Pocketshop Core - Shared types library.
//!
//! This crate provides common types used across all Pocketshop components:
//! - `storefront` - The demo shop HTTP service
//! - `integration-tests` - End-to-end API tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP handling. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Typed IDs, prices, and the user/catalog/cart/order records

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
