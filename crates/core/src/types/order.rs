//! Order record.

use serde::{Deserialize, Serialize};

use crate::types::cart::CartItem;
use crate::types::id::OrderId;

/// A placed order.
///
/// Created by snapshotting the cart at checkout. The total is computed once
/// at creation and never recomputed; the record is immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Sequential 1-based order ID.
    pub id: OrderId,
    /// Cart lines captured at checkout, in cart order.
    pub items: Vec<CartItem>,
    /// Sum of `price * quantity` over `items` at creation time.
    pub total: i64,
}
