//! Integration tests for Sundrift.
//!
//! # Test Categories
//!
//! - `session_persistence` - cart/wishlist round-trips through a real
//!   [`sundrift_storefront::FileStore`] across simulated process restarts
//! - `checkout_flows` - end-to-end cart scenarios and the two order-summary
//!   formulas
//!
//! Shared helpers live here so the test binaries stay small.

use rust_decimal::Decimal;
use sundrift_core::{Product, ProductId};
use tracing_subscriber::EnvFilter;

/// Install a test tracing subscriber honoring `RUST_LOG`.
///
/// Safe to call from every test; only the first call wins.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Build a product with the given id and price, filling display fields
/// deterministically.
///
/// # Panics
///
/// Panics if `price` is not a valid decimal literal.
#[must_use]
pub fn test_product(id: i64, price: &str) -> Product {
    Product::new(
        ProductId::new(id),
        format!("Product {id}"),
        price.parse::<Decimal>().expect("valid decimal literal"),
        format!("https://cdn.example.com/{id}.jpg"),
        "Test".to_string(),
    )
}
