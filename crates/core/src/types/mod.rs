//! Core types for Maison.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod id;
pub mod item;
pub mod price;

pub use cart::Cart;
pub use id::*;
pub use item::CartItem;
pub use price::{Price, PriceError};
