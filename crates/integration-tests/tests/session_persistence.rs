//! Cart and wishlist persistence across simulated process restarts.
//!
//! Each test opens a `FileStore` over a temp directory, runs a session,
//! drops it, and starts a new session over a fresh store handle on the same
//! directory - the closest a test gets to a real restart.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use sundrift_core::ProductId;
use sundrift_integration_tests::{init_tracing, test_product};
use sundrift_storefront::{FileStore, Session, StateStore};

#[test]
fn cart_round_trips_across_restart() {
    init_tracing();
    let dir = tempfile::tempdir().expect("tempdir");

    {
        let store = FileStore::open(dir.path()).expect("open store");
        let mut session = Session::new(store);
        session.add_to_cart(&test_product(1, "20.00"), 1).unwrap();
        session.add_to_cart(&test_product(2, "5.50"), 4).unwrap();
        session.add_to_cart(&test_product(1, "20.00"), 2).unwrap();
    }

    // "Restart": fresh store handle, fresh session, same directory.
    let store = FileStore::open(dir.path()).expect("reopen store");
    let session = Session::new(store);

    let cart = session.cart();
    assert_eq!(cart.len(), 2);
    assert_eq!(cart.get(ProductId::new(1)).unwrap().quantity, 3);
    assert_eq!(cart.get(ProductId::new(2)).unwrap().quantity, 4);
    assert_eq!(cart.subtotal(), Decimal::new(82_00, 2));
    // Display snapshot survived too.
    assert_eq!(cart.get(ProductId::new(1)).unwrap().name, "Product 1");
}

#[test]
fn wishlist_round_trips_across_restart() {
    init_tracing();
    let dir = tempfile::tempdir().expect("tempdir");

    {
        let store = FileStore::open(dir.path()).expect("open store");
        let mut session = Session::new(store);
        session.add_to_wishlist(&test_product(5, "12.00"));
        session.add_to_wishlist(&test_product(9, "99.99"));
        session.remove_from_wishlist(ProductId::new(9));
    }

    let session = Session::new(FileStore::open(dir.path()).expect("reopen store"));
    assert_eq!(session.wishlist().len(), 1);
    assert!(session.wishlist().contains(ProductId::new(5)));
    assert!(!session.wishlist().contains(ProductId::new(9)));
}

#[test]
fn removal_is_persisted_not_just_in_memory() {
    init_tracing();
    let dir = tempfile::tempdir().expect("tempdir");

    {
        let store = FileStore::open(dir.path()).expect("open store");
        let mut session = Session::new(store);
        session.add_to_cart(&test_product(1, "10.00"), 2).unwrap();
        session.add_to_cart(&test_product(2, "10.00"), 1).unwrap();
        session.set_cart_quantity(ProductId::new(1), 0);
    }

    let session = Session::new(FileStore::open(dir.path()).expect("reopen store"));
    assert_eq!(session.cart().len(), 1);
    assert!(session.cart().get(ProductId::new(1)).is_none());
}

#[test]
fn corrupt_cart_file_starts_empty_without_touching_wishlist() {
    init_tracing();
    let dir = tempfile::tempdir().expect("tempdir");

    {
        let store = FileStore::open(dir.path()).expect("open store");
        let mut session = Session::new(store);
        session.add_to_cart(&test_product(1, "10.00"), 1).unwrap();
        session.add_to_wishlist(&test_product(5, "12.00"));
    }

    // Corrupt only the cart file.
    let mut store = FileStore::open(dir.path()).expect("reopen store");
    store.save("cart", "{definitely not json").unwrap();

    let session = Session::new(store);
    assert!(session.cart().is_empty());
    assert_eq!(session.wishlist().len(), 1);
}

#[test]
fn missing_optional_fields_tolerated_on_load() {
    init_tracing();
    let dir = tempfile::tempdir().expect("tempdir");

    // A minimal hand-written payload: no image_url, no category.
    let mut store = FileStore::open(dir.path()).expect("open store");
    store
        .save(
            "cart",
            r#"[{"product_id":3,"unit_price":"7.25","quantity":2,"name":"Mug"}]"#,
        )
        .unwrap();

    let session = Session::new(store);
    let line = session.cart().get(ProductId::new(3)).expect("line loaded");
    assert_eq!(line.quantity, 2);
    assert_eq!(line.unit_price, Decimal::new(7_25, 2));
    assert_eq!(line.image_url, "");
    assert_eq!(line.category, "");
}

#[test]
fn move_to_cart_is_atomic_across_restart() {
    init_tracing();
    let dir = tempfile::tempdir().expect("tempdir");

    {
        let store = FileStore::open(dir.path()).expect("open store");
        let mut session = Session::new(store);
        session.add_to_wishlist(&test_product(5, "12.00"));
        assert!(session.move_to_cart(ProductId::new(5)));
    }

    let session = Session::new(FileStore::open(dir.path()).expect("reopen store"));
    assert!(!session.wishlist().contains(ProductId::new(5)));
    let line = session.cart().get(ProductId::new(5)).expect("moved line");
    assert_eq!(line.quantity, 1);
    assert_eq!(line.unit_price, Decimal::new(12_00, 2));
}
