//! The cart: an ordered, id-unique collection of items with quantities.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::types::id::ProductId;
use crate::types::item::CartItem;
use crate::types::price::Price;

/// Violations of the cart invariants found in externally supplied data.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CartDataError {
    /// Two entries share the same product id.
    #[error("duplicate product id in cart data: {0}")]
    DuplicateId(ProductId),
    /// An entry carries a zero quantity.
    #[error("zero quantity for product id: {0}")]
    ZeroQuantity(ProductId),
}

/// An ordered sequence of [`CartItem`], unique by product id.
///
/// Insertion order is preserved and drives display order. Mutation keeps the
/// invariants: no id appears twice, every quantity is at least 1, and an
/// item decremented to zero is dropped entirely. First-seen name, price, and
/// image win on repeated adds of the same id.
///
/// The cart serializes as a plain JSON array of its items, the shape the
/// persistence layer stores under its well-known key. Deserialization
/// re-validates the invariants so a foreign or tampered blob cannot smuggle
/// in a duplicate id or a zero-quantity row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a cart from existing items, validating the invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CartDataError`] if two items share an id or any quantity
    /// is zero.
    pub fn from_items(items: Vec<CartItem>) -> Result<Self, CartDataError> {
        for (i, item) in items.iter().enumerate() {
            if item.quantity == 0 {
                return Err(CartDataError::ZeroQuantity(item.id.clone()));
            }
            if items.iter().take(i).any(|prior| prior.id == item.id) {
                return Err(CartDataError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self { items })
    }

    /// Add one unit of a product.
    ///
    /// An id already in the cart gets its quantity bumped by 1; the stored
    /// name, price, and image stay as first seen even if different values
    /// are passed. A new id is appended with quantity 1.
    pub fn add(
        &mut self,
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Price,
        image: impl Into<String>,
    ) {
        let id = id.into();
        if let Some(existing) = self.items.iter_mut().find(|item| item.id == id) {
            existing.quantity = existing.quantity.saturating_add(1);
        } else {
            self.items.push(CartItem::new(id, name, price, image));
        }
    }

    /// Remove one unit of a product.
    ///
    /// Decrements the quantity, removing the row entirely when it would hit
    /// zero; relative order of the remaining items is preserved. Removing an
    /// absent id is a no-op. Returns whether the cart changed.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let Some(pos) = self.items.iter().position(|item| &item.id == id) else {
            return false;
        };
        let keep_row = self.items.get(pos).is_some_and(|item| item.quantity > 1);
        if keep_row {
            if let Some(item) = self.items.get_mut(pos) {
                item.quantity -= 1;
            }
        } else {
            self.items.remove(pos);
        }
        true
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Read-only snapshot of the items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether the cart has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct products (rows), not total units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Total units across all items; 0 when empty.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of `price * quantity` over all items; 0 when empty.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }
}

impl<'de> Deserialize<'de> for Cart {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<CartItem>::deserialize(deserializer)?;
        Self::from_items(items).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Cart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} item(s), {} unit(s)",
            self.len(),
            self.total_quantity()
        )
    }
}
