//! A single cart row: product metadata plus quantity.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;
use crate::types::price::Price;

/// One product entry in the cart.
///
/// The `name`, `price`, and `image` are snapshots taken when the product is
/// first added; repeated adds of the same id only bump `quantity` and never
/// overwrite them. A `CartItem` always has `quantity >= 1` - an item that
/// would reach zero is removed from the cart instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Unique product identifier; lookup key within the cart.
    pub id: ProductId,
    /// Display name, fixed at first add.
    pub name: String,
    /// Per-unit price, fixed at first add.
    pub price: Price,
    /// URI of the display asset.
    pub image: String,
    /// Units of this product in the cart; always at least 1.
    pub quantity: u32,
}

impl CartItem {
    /// Create a new single-unit entry.
    #[must_use]
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Price,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
            quantity: 1,
        }
    }

    /// `price * quantity` for this row.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price.amount() * Decimal::from(self.quantity)
    }
}
