//! Maison Core - Shared domain types.
//!
//! This crate provides the cart data model used across all Maison components:
//! - `cart` - Cart state manager (persistence, repository, rendering, dispatch)
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no UI
//! concerns. The cart invariants (id uniqueness, quantity >= 1, first-seen
//! prices) are enforced here so every consumer can rely on them.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices, plus the
//!   [`CartItem`] and [`Cart`] model

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
