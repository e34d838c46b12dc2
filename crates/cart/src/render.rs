//! Display projections of the cart.
//!
//! Pure functions over a [`Cart`] snapshot; nothing here holds state. The
//! consumer re-invokes after every mutation (call-when-changed), renders the
//! result into the badge and the cart-contents container, and is free to
//! drop the views immediately.

use maison_core::{Cart, CartItem};
use rust_decimal::Decimal;

/// Fixed message shown in place of line items when the cart is empty.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty.";

/// Display projection of one cart row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    /// Product display name.
    pub name: String,
    /// Units in the cart.
    pub quantity: u32,
    /// `price * quantity`, formatted to two decimal places.
    pub line_total: String,
    /// URI of the display asset.
    pub image: String,
}

impl From<&CartItem> for LineItem {
    fn from(item: &CartItem) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity,
            line_total: format_amount(item.line_total()),
            image: item.image.clone(),
        }
    }
}

/// Aggregate display projection of the whole cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    /// One entry per cart item, in cart order.
    pub items: Vec<LineItem>,
    /// Grand total, formatted to two decimal places.
    pub total: String,
    /// Total unit count for the cart icon.
    pub badge: u64,
}

impl CartView {
    /// Project the current cart into its display form.
    #[must_use]
    pub fn project(cart: &Cart) -> Self {
        Self {
            items: line_items(cart),
            total: total(cart),
            badge: badge(cart),
        }
    }

    /// An empty cart's view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: format_amount(Decimal::ZERO),
            badge: 0,
        }
    }

    /// Whether the empty-state message should be shown instead of items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The cart icon's count: total units across all items.
#[must_use]
pub fn badge(cart: &Cart) -> u64 {
    cart.total_quantity()
}

/// One display entry per cart item, in cart order.
#[must_use]
pub fn line_items(cart: &Cart) -> Vec<LineItem> {
    cart.items().iter().map(LineItem::from).collect()
}

/// The message shown when the cart has zero items.
#[must_use]
pub const fn empty_state() -> &'static str {
    EMPTY_CART_MESSAGE
}

/// The cart's grand total, formatted to two decimal places.
#[must_use]
pub fn total(cart: &Cart) -> String {
    format_amount(cart.total_price())
}

/// Format a decimal amount with exactly two decimal places.
fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}
