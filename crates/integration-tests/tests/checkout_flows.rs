//! End-to-end cart scenarios and order-summary composition.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use sundrift_core::ProductId;
use sundrift_integration_tests::{init_tracing, test_product};
use sundrift_storefront::api::{CustomerInfo, OrderInput};
use sundrift_storefront::{CartSummary, CheckoutSummary, MemoryStore, Session};

fn customer() -> CustomerInfo {
    CustomerInfo {
        user_name: "Ada".to_string(),
        user_email: "ada@example.com".to_string(),
        user_phone: "555-0100".to_string(),
        shipping_address: "1 Main St, Springfield, IL 62704".to_string(),
    }
}

#[test]
fn scenario_repeated_add_reaches_free_shipping() {
    init_tracing();
    // add(id 1, $20) x1 then x2: one line, qty 3, subtotal 60, free
    // shipping (60 > 50), total 60.
    let mut session = Session::new(MemoryStore::new());
    let p = test_product(1, "20.00");
    session.add_to_cart(&p, 1).unwrap();
    session.add_to_cart(&p, 2).unwrap();

    assert_eq!(session.cart().len(), 1);
    assert_eq!(session.cart().item_count(), 3);

    let summary = CartSummary::compute(session.cart());
    assert_eq!(summary.subtotal, Decimal::new(60_00, 2));
    assert_eq!(summary.shipping, Decimal::ZERO);
    assert_eq!(summary.total, Decimal::new(60_00, 2));
    assert_eq!(summary.remaining_for_free_shipping, None);
}

#[test]
fn scenario_quantity_zero_empties_cart() {
    init_tracing();
    let mut session = Session::new(MemoryStore::new());
    session.add_to_cart(&test_product(2, "30.00"), 1).unwrap();
    session.set_cart_quantity(ProductId::new(2), 0);

    assert!(session.cart().is_empty());
    assert_eq!(session.cart().item_count(), 0);
}

#[test]
fn scenario_wishlist_to_cart() {
    init_tracing();
    let mut session = Session::new(MemoryStore::new());
    session.add_to_wishlist(&test_product(5, "8.00"));

    assert!(session.move_to_cart(ProductId::new(5)));

    assert!(!session.wishlist().contains(ProductId::new(5)));
    assert_eq!(session.cart().get(ProductId::new(5)).unwrap().quantity, 1);
}

#[test]
fn order_submission_payload_then_cleared_cart() {
    init_tracing();
    let mut session = Session::new(MemoryStore::new());
    session.add_to_cart(&test_product(1, "20.00"), 2).unwrap();
    session.add_to_cart(&test_product(2, "5.00"), 1).unwrap();

    let order = OrderInput::from_cart(customer(), session.cart());
    assert_eq!(order.total_amount, Decimal::new(45_00, 2));
    assert_eq!(order.items.len(), 2);

    // Order placed: the cart clears, the wishlist is untouched.
    session.add_to_wishlist(&test_product(9, "1.00"));
    session.clear_cart();
    assert!(session.cart().is_empty());
    assert_eq!(session.wishlist().len(), 1);
}

#[test]
fn cart_and_checkout_pages_disagree_on_purpose() {
    init_tracing();
    let mut session = Session::new(MemoryStore::new());
    session.add_to_cart(&test_product(1, "20.00"), 1).unwrap();

    let cart_page = CartSummary::compute(session.cart());
    let checkout_page = CheckoutSummary::compute(session.cart());

    // Cart page: $20 + $10 shipping. Checkout page: $20 + 10% tax.
    assert_eq!(cart_page.total, Decimal::new(30_00, 2));
    assert_eq!(checkout_page.total, Decimal::new(22_00, 2));
    // The submitted order carries the untaxed subtotal regardless.
    let order = OrderInput::from_cart(customer(), session.cart());
    assert_eq!(order.total_amount, Decimal::new(20_00, 2));
}

#[test]
fn threshold_boundary_exact() {
    init_tracing();
    let mut session = Session::new(MemoryStore::new());
    session.add_to_cart(&test_product(1, "25.00"), 2).unwrap();

    // Exactly 50.00: not free.
    let summary = CartSummary::compute(session.cart());
    assert_eq!(summary.subtotal, Decimal::new(50_00, 2));
    assert_eq!(summary.shipping, Decimal::new(10_00, 2));

    // One cent over: free.
    session.add_to_cart(&test_product(2, "0.01"), 1).unwrap();
    let summary = CartSummary::compute(session.cart());
    assert_eq!(summary.shipping, Decimal::ZERO);
}
