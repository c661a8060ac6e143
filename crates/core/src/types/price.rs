//! Type-safe price representation in minor currency units.
//!
//! Prices are stored as whole minor units (e.g. cents) rather than floats so
//! that cart and order totals stay exact under addition and multiplication.

use serde::{Deserialize, Serialize};

/// A price in minor currency units (e.g. cents for USD).
///
/// Serializes transparently as a plain integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// Create a price from minor currency units.
    #[must_use]
    pub const fn from_minor_units(units: i64) -> Self {
        Self(units)
    }

    /// Get the price as minor currency units.
    #[must_use]
    pub const fn as_minor_units(&self) -> i64 {
        self.0
    }

    /// Price of a line of `quantity` items at this unit price.
    #[must_use]
    pub const fn line_total(&self, quantity: i64) -> i64 {
        self.0 * quantity
    }
}

impl From<i64> for Price {
    fn from(units: i64) -> Self {
        Self(units)
    }
}

impl From<Price> for i64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let price = Price::from_minor_units(1299);
        assert_eq!(price.line_total(3), 3897);
        assert_eq!(price.line_total(0), 0);
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Price::from_minor_units(399)).unwrap();
        assert_eq!(json, "399");

        let price: Price = serde_json::from_str("2499").unwrap();
        assert_eq!(price.as_minor_units(), 2499);
    }
}
