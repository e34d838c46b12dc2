//! Repository behavior scenarios over an in-memory store.
//!
//! Each scenario drives the repository exactly the way the UI bindings
//! would and checks the resulting snapshot, totals, and invariants.

use maison_cart::repository::CartRepository;
use maison_cart::store::MemoryStore;
use maison_core::{Price, ProductId};
use rust_decimal::dec;

fn price(s: &str) -> Price {
    Price::parse(s).unwrap()
}

fn open_empty() -> CartRepository<MemoryStore> {
    CartRepository::open(MemoryStore::new(), "maison.cart")
}

// =============================================================================
// Core Scenarios
// =============================================================================

/// Empty cart, one add: a single quantity-1 row with matching totals.
#[test]
fn test_first_add_creates_single_row() {
    let mut repo = open_empty();
    repo.add_item("p1", "Widget", price("9.99"), "w.png").unwrap();

    let items = repo.items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, ProductId::new("p1"));
    assert_eq!(items[0].name, "Widget");
    assert_eq!(items[0].price, price("9.99"));
    assert_eq!(items[0].image, "w.png");
    assert_eq!(items[0].quantity, 1);

    assert_eq!(repo.total_quantity(), 1);
    assert_eq!(repo.total_price(), dec!(9.99));
}

/// Re-adding the same id bumps quantity; first-seen fields win even when
/// different values are passed.
#[test]
fn test_repeat_add_bumps_quantity_first_seen_fields_win() {
    let mut repo = open_empty();
    repo.add_item("p1", "Widget", price("9.99"), "w.png").unwrap();
    repo.add_item("p1", "Widget Deluxe", price("199.99"), "deluxe.png")
        .unwrap();

    let items = repo.items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].quantity, 2);
    assert_eq!(items[0].name, "Widget");
    assert_eq!(items[0].price, price("9.99"));
    assert_eq!(items[0].image, "w.png");
    assert_eq!(repo.total_price(), dec!(19.98));
}

/// Removing from quantity 2 decrements and keeps the row.
#[test]
fn test_remove_decrements_above_one() {
    let mut repo = open_empty();
    repo.add_item("p1", "Widget", price("9.99"), "w.png").unwrap();
    repo.add_item("p1", "Widget", price("9.99"), "w.png").unwrap();

    repo.remove_item(&ProductId::new("p1")).unwrap();
    assert_eq!(repo.items().len(), 1);
    assert_eq!(repo.items()[0].quantity, 1);
}

/// Removing from quantity 1 drops the row entirely.
#[test]
fn test_remove_at_one_drops_row() {
    let mut repo = open_empty();
    repo.add_item("p1", "Widget", price("9.99"), "w.png").unwrap();

    repo.remove_item(&ProductId::new("p1")).unwrap();
    assert!(repo.items().is_empty());
    assert_eq!(repo.total_quantity(), 0);
}

/// Clearing a non-empty cart zeroes everything.
#[test]
fn test_clear_non_empty_cart() {
    let mut repo = open_empty();
    repo.add_item("p1", "Widget", price("9.99"), "w.png").unwrap();
    repo.add_item("p2", "Gadget", price("4.50"), "g.png").unwrap();

    repo.clear().unwrap();
    assert!(repo.items().is_empty());
    assert_eq!(repo.total_quantity(), 0);
    assert_eq!(repo.total_price(), dec!(0));
}

/// Opening with no persisted value yields an empty cart without error.
#[test]
fn test_open_fresh_store_is_empty() {
    let repo = open_empty();
    assert!(repo.is_empty());
}

// =============================================================================
// Properties
// =============================================================================

/// Over an arbitrary add/remove sequence the reported total always matches
/// the sum of row quantities, and no row ever sits at zero.
#[test]
fn test_totals_track_quantities_through_mixed_operations() {
    let mut repo = open_empty();
    let ops: &[(&str, bool)] = &[
        ("p1", true),
        ("p2", true),
        ("p1", true),
        ("p3", true),
        ("p2", false),
        ("p2", false), // now absent: no-op
        ("p1", false),
        ("p4", true),
        ("ghost", false),
        ("p1", true),
    ];

    for &(id, is_add) in ops {
        if is_add {
            repo.add_item(id, id.to_uppercase(), price("2.50"), "x.png")
                .unwrap();
        } else {
            repo.remove_item(&ProductId::new(id)).unwrap();
        }

        let sum: u64 = repo.items().iter().map(|i| u64::from(i.quantity)).sum();
        assert_eq!(repo.total_quantity(), sum);
        assert!(repo.items().iter().all(|i| i.quantity >= 1));
        assert_eq!(
            repo.total_price(),
            dec!(2.50) * rust_decimal::Decimal::from(sum)
        );
    }
}

/// Removing an absent id is idempotent: the cart is unchanged.
#[test]
fn test_remove_absent_id_leaves_cart_unchanged() {
    let mut repo = open_empty();
    repo.add_item("p1", "Widget", price("9.99"), "w.png").unwrap();
    repo.add_item("p2", "Gadget", price("4.50"), "g.png").unwrap();
    let before = repo.cart().clone();

    repo.remove_item(&ProductId::new("absent")).unwrap();
    repo.remove_item(&ProductId::new("absent")).unwrap();
    assert_eq!(repo.cart(), &before);
}

/// Display order is insertion order and survives interior removals.
#[test]
fn test_insertion_order_preserved() {
    let mut repo = open_empty();
    for id in ["p3", "p1", "p4", "p2"] {
        repo.add_item(id, id, price("1.00"), "x.png").unwrap();
    }
    repo.remove_item(&ProductId::new("p4")).unwrap();

    let ids: Vec<_> = repo.items().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, ["p3", "p1", "p2"]);
}
