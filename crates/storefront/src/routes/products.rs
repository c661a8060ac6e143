//! Catalog route handlers.

use axum::{Json, extract::State};
use tracing::instrument;

use pocketshop_core::Product;

use crate::state::AppState;

/// List the full product catalog.
///
/// GET /products
///
/// Returns every seeded product in seed order; there is no filtering,
/// search, or pagination.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.store().products().to_vec())
}
