//! Persistence: the key-value surface and the cart store adapter.
//!
//! The cart is persisted as one serialized value under one well-known key,
//! the way a browser page would keep it in local storage. [`KeyValue`] is
//! that surface; [`FileStore`] and [`MemoryStore`] are its two backends.
//! [`CartStore`] sits on top and owns the serialization contract: corrupt
//! or foreign data loads as an empty cart, never as an error.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use maison_core::Cart;

/// Well-known storage key the cart blob lives under by default.
pub const DEFAULT_CART_KEY: &str = "maison.cart";

/// Errors from the persistence layer.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// Reading or writing the backing store failed.
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding the value to be stored failed.
    #[error("store serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The external key-value persistence surface.
///
/// String keys to string values, fully replaced on every write - the local
/// storage model. Backends decide durability; callers must not assume a
/// value survives concurrent writers (last write wins).
pub trait KeyValue {
    /// Read the value under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the write fails. A failed write must leave
    /// any previously stored value intact.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete the value under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing store cannot be updated.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Store adapter: serializes the cart in and out of a [`KeyValue`] backend.
#[derive(Debug)]
pub struct CartStore<K> {
    backend: K,
    key: String,
}

impl<K: KeyValue> CartStore<K> {
    /// Create a store adapter over `backend`, keyed by `key`.
    pub fn new(backend: K, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Load the persisted cart.
    ///
    /// A missing key is a fresh session and loads as an empty cart. A value
    /// that cannot be read or does not decode as valid cart data (foreign
    /// blob, tampered JSON, invariant violations) also loads as an empty
    /// cart, with a warning - recovery here is deliberate, a stale cart
    /// must never take the page down.
    pub fn load(&self) -> Cart {
        let raw = match self.backend.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Cart::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to read persisted cart; starting empty");
                return Cart::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(cart) => cart,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "malformed persisted cart; starting empty");
                Cart::new()
            }
        }
    }

    /// Serialize `cart` and replace the persisted value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if encoding or the write fails; the previously
    /// persisted value is left intact in that case.
    pub fn save(&mut self, cart: &Cart) -> Result<(), StoreError> {
        let raw = serde_json::to_string(cart)?;
        self.backend.set(&self.key, &raw)
    }

    /// The storage key this adapter writes under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Mutable access to the backend, for tests that simulate failures.
    #[cfg(test)]
    pub(crate) fn backend_mut(&mut self) -> &mut K {
        &mut self.backend
    }

    /// Consume the adapter and return its backend.
    #[cfg(test)]
    pub(crate) fn into_backend(self) -> K {
        self.backend
    }
}

#[cfg(test)]
mod tests {
    use maison_core::Price;

    use super::*;

    fn sample_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add("p1", "Widget", Price::parse("9.99").unwrap(), "w.png");
        cart.add("p2", "Gadget", Price::parse("4.50").unwrap(), "g.png");
        cart.add("p1", "Widget", Price::parse("9.99").unwrap(), "w.png");
        cart
    }

    #[test]
    fn test_load_missing_key_is_empty_cart() {
        let store = CartStore::new(MemoryStore::new(), DEFAULT_CART_KEY);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let mut store = CartStore::new(MemoryStore::new(), "maison.cart");
        let cart = sample_cart();

        store.save(&cart).unwrap();
        assert_eq!(store.load(), cart);
    }

    #[test]
    fn test_load_malformed_json_recovers_to_empty() {
        let mut backend = MemoryStore::new();
        backend.set("maison.cart", "{not json").unwrap();

        let store = CartStore::new(backend, "maison.cart");
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_foreign_value_recovers_to_empty() {
        let mut backend = MemoryStore::new();
        backend.set("maison.cart", r#"{"theme":"dark"}"#).unwrap();

        let store = CartStore::new(backend, "maison.cart");
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_invariant_violation_recovers_to_empty() {
        // Valid JSON, invalid cart: zero quantity.
        let mut backend = MemoryStore::new();
        backend
            .set(
                "maison.cart",
                r#"[{"id":"p1","name":"A","price":1.0,"image":"a.png","quantity":0}]"#,
            )
            .unwrap();

        let store = CartStore::new(backend, "maison.cart");
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_replaces_prior_value() {
        let mut store = CartStore::new(MemoryStore::new(), "maison.cart");
        store.save(&sample_cart()).unwrap();

        let mut smaller = Cart::new();
        smaller.add("p3", "Trinket", Price::parse("1.00").unwrap(), "t.png");
        store.save(&smaller).unwrap();

        assert_eq!(store.load(), smaller);
    }

    #[test]
    fn test_failed_write_keeps_prior_value() {
        let mut backend = MemoryStore::new();
        let cart = sample_cart();
        backend
            .set("maison.cart", &serde_json::to_string(&cart).unwrap())
            .unwrap();
        backend.poison();

        let mut store = CartStore::new(backend, "maison.cart");
        assert!(store.save(&Cart::new()).is_err());
        assert_eq!(store.load(), cart);
    }
}
