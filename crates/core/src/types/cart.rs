//! Cart line items and the cart view returned to clients.

use serde::{Deserialize, Serialize};

use crate::types::product::Product;

/// A single line in the cart.
///
/// Holds a full copy of the product rather than a reference, so the line
/// stays valid on its own once snapshotted into an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Copy of the catalog product at add-time.
    pub product: Product,
    /// Requested quantity. Zero and negative values are stored as-is.
    pub quantity: i64,
}

impl CartItem {
    /// Price of this line: unit price times quantity.
    #[must_use]
    pub const fn line_total(&self) -> i64 {
        self.product.price.line_total(self.quantity)
    }
}

/// Cart contents plus the running total, as served by `GET /cart`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartView {
    /// Current cart lines in insertion order.
    pub items: Vec<CartItem>,
    /// Sum of `price * quantity` over all lines.
    pub total: i64,
}

/// Sum of `price * quantity` over the given lines.
#[must_use]
pub fn total_of(items: &[CartItem]) -> i64 {
    items.iter().map(CartItem::line_total).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::id::ProductId;
    use crate::types::price::Price;

    fn item(price: i64, quantity: i64) -> CartItem {
        CartItem {
            product: Product::new(ProductId::new(1), "Widget", Price::from_minor_units(price)),
            quantity,
        }
    }

    #[test]
    fn test_total_of_empty() {
        assert_eq!(total_of(&[]), 0);
    }

    #[test]
    fn test_total_of_sums_lines() {
        let items = vec![item(399, 2), item(1299, 3)];
        assert_eq!(total_of(&items), 399 * 2 + 1299 * 3);
    }

    #[test]
    fn test_zero_quantity_contributes_nothing() {
        let items = vec![item(2499, 0)];
        assert_eq!(total_of(&items), 0);
    }
}
