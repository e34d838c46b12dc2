//! Integration tests for the Maison cart subsystem.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p maison-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_scenarios` - Repository behavior over an in-memory store
//! - `persistence` - File-backed store, round-trips, corruption recovery
//! - `dispatch` - End-to-end action flows (add / remove / checkout)

#![cfg_attr(not(test), forbid(unsafe_code))]
