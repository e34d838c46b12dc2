//! The cart repository: owns the session's in-memory cart.

use maison_core::{Cart, CartItem, Price, ProductId};
use rust_decimal::Decimal;

use crate::store::{CartStore, KeyValue, StoreError};

/// Owns the single in-memory [`Cart`] for the current session.
///
/// Constructed once via [`CartRepository::open`], which performs the one
/// load from the store; there is no teardown, the repository simply goes
/// away with the session. All mutation goes through the repository, and
/// every mutation re-persists the full cart.
///
/// Persistence failures propagate to the caller but never roll back the
/// in-memory mutation: the state the user sees stays accurate even when the
/// write behind it failed.
#[derive(Debug)]
pub struct CartRepository<K> {
    cart: Cart,
    store: CartStore<K>,
}

impl<K: KeyValue> CartRepository<K> {
    /// Open the repository over `backend`, loading any persisted cart from
    /// under `key`. Missing or malformed persisted data starts the session
    /// with an empty cart.
    pub fn open(backend: K, key: impl Into<String>) -> Self {
        let store = CartStore::new(backend, key);
        let cart = store.load();
        Self { cart, store }
    }

    /// Add one unit of a product and persist.
    ///
    /// An existing id gets its quantity bumped; name, price, and image keep
    /// their first-seen values. A new id is appended with quantity 1. The
    /// price has already been validated by [`Price`] construction - invalid
    /// input never reaches this method.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if persisting fails; the in-memory cart keeps
    /// the mutation.
    pub fn add_item(
        &mut self,
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Price,
        image: impl Into<String>,
    ) -> Result<(), StoreError> {
        self.cart.add(id, name, price, image);
        self.store.save(&self.cart)
    }

    /// Remove one unit of a product and persist.
    ///
    /// Decrements the quantity, dropping the row at zero; an absent id is a
    /// silent no-op. Persists afterward either way.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if persisting fails; the in-memory cart keeps
    /// the mutation.
    pub fn remove_item(&mut self, id: &ProductId) -> Result<(), StoreError> {
        self.cart.remove(id);
        self.store.save(&self.cart)
    }

    /// Empty the cart and persist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if persisting fails; the in-memory cart keeps
    /// the mutation.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.cart.clear();
        self.store.save(&self.cart)
    }

    /// Read-only snapshot of the cart contents, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        self.cart.items()
    }

    /// The current cart, for projection by the renderer.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Total units across all items; 0 for an empty cart.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.cart.total_quantity()
    }

    /// Sum of `price * quantity`; 0 for an empty cart.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.cart.total_price()
    }

    /// Whether the cart has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }
}
