//! Maison Cart - the cart subsystem of the Maison demo storefront.
//!
//! # Architecture
//!
//! Data flows one way through four small layers:
//!
//! ```text
//! UI event -> dispatch -> repository mutation -> persisted write
//!                                  |
//!                            render (pure projection) -> badge / line items
//! ```
//!
//! - [`store`] - the key-value persistence surface and the cart store
//!   adapter built on it. Missing or malformed persisted data loads as an
//!   empty cart; writes replace the whole value atomically.
//! - [`repository`] - owns the single in-memory [`maison_core::Cart`] for
//!   the session; every mutation persists the full cart afterward.
//! - [`render`] - pure projections of the cart into display structures
//!   (badge count, line items, formatted total). No stored state.
//! - [`dispatch`] - translates UI events ([`CartAction`]) into repository
//!   calls and re-renders; the repository itself stays UI-free.
//!
//! All operations are synchronous and run on the caller's thread; the cart
//! has exactly one logical mutator per session. The persisted store may be
//! shared by concurrent sessions, which race last-write-wins by design.
//!
//! # Example
//!
//! ```
//! use maison_cart::dispatch::{CartAction, Dispatcher};
//! use maison_cart::repository::CartRepository;
//! use maison_cart::store::MemoryStore;
//!
//! let repository = CartRepository::open(MemoryStore::new(), "maison.cart");
//! let mut dispatcher = Dispatcher::new(repository);
//!
//! let update = dispatcher
//!     .dispatch(CartAction::add("p1", "Widget", "9.99", "w.png"))
//!     .unwrap();
//! assert_eq!(update.badge, 1);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod dispatch;
pub mod render;
pub mod repository;
pub mod store;

pub use config::{CartConfig, ConfigError};
pub use dispatch::{AddFeedback, CartAction, DispatchError, Dispatcher, Notice, Update};
pub use render::{CartView, LineItem};
pub use repository::CartRepository;
pub use store::{CartStore, DEFAULT_CART_KEY, FileStore, KeyValue, MemoryStore, StoreError};
