//! Order route handlers.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use pocketshop_core::Order;

use crate::state::AppState;

/// Response from placing an order.
#[derive(Debug, Serialize)]
pub struct PlaceOrderResponse {
    pub order: Order,
}

/// Snapshot the cart into a new order and clear the cart.
///
/// POST /orders
///
/// Always succeeds; an empty cart yields an order with no items and total 0.
#[instrument(skip(state))]
pub async fn place(State(state): State<AppState>) -> Json<PlaceOrderResponse> {
    let order = state.store().place_order();
    tracing::info!(order_id = %order.id, total = order.total, "order placed");

    Json(PlaceOrderResponse { order })
}

/// Full order log in creation order.
///
/// GET /orders
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<Vec<Order>> {
    Json(state.store().orders().to_vec())
}
