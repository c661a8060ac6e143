//! Cart route handlers.
//!
//! The cart is a single shared list, not keyed by user or session. Removal
//! positions are 1-based and transient: removing a line renumbers everything
//! after it, so clients re-fetch the cart between removals.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use pocketshop_core::{CartView, ProductId};

use crate::error::AppError;
use crate::state::AppState;

/// Add-to-cart request body.
#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    /// Catalog product ID. Defaults to 0 (never a valid product) when absent.
    #[serde(default)]
    pub product_id: i32,
    /// Quantity to record. Stored as-is; zero and negatives are accepted.
    #[serde(default)]
    pub quantity: i64,
}

/// Acknowledgement body for cart mutations.
#[derive(Debug, Serialize)]
pub struct CartAck {
    pub message: &'static str,
}

/// Append a product line to the cart.
///
/// POST /cart/add
///
/// # Errors
///
/// Returns `AppError::MalformedBody` on an unparsable body and
/// `AppError::ProductNotFound` when the product ID is not in the catalog.
#[instrument(skip_all)]
pub async fn add(
    State(state): State<AppState>,
    body: Result<Json<AddToCartRequest>, JsonRejection>,
) -> Result<Json<CartAck>, AppError> {
    let Json(req) = body?;

    state
        .store()
        .add_to_cart(ProductId::new(req.product_id), req.quantity)?;

    Ok(Json(CartAck { message: "added" }))
}

/// Current cart contents and running total.
///
/// GET /cart
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<CartView> {
    Json(state.store().view_cart())
}

/// Remove the cart line at a 1-based position.
///
/// DELETE /cart/remove/{id}
///
/// A non-numeric path segment is treated as position 0, which is always out
/// of range.
///
/// # Errors
///
/// Returns `AppError::InvalidPosition` when the position is outside
/// `[1, len]`; the cart is left untouched.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CartAck>, AppError> {
    let position = id.parse::<usize>().unwrap_or(0);

    state.store().remove_from_cart(position)?;

    Ok(Json(CartAck { message: "removed" }))
}
