//! The cart ledger: ordered line items with merge-by-identity semantics.
//!
//! The ledger is the authoritative in-memory cart. It is purely synchronous
//! and does no I/O; persistence is layered on top by [`crate::session`].
//!
//! # Invariants
//!
//! - At most one [`LineItem`] per product id in any snapshot.
//! - Every line has quantity >= 1; a line is removed outright rather than
//!   retained at zero.
//! - Unit price and display fields are snapshotted when a product is first
//!   added and never refreshed by later adds (price-at-add-time semantics).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use sundrift_core::{Product, ProductId};

/// Orders with a subtotal strictly above this ship free.
///
/// The comparison is strict: a subtotal of exactly 50.00 still pays the
/// flat fee.
#[must_use]
pub fn free_shipping_threshold() -> Decimal {
    Decimal::new(50_00, 2)
}

/// Flat shipping fee charged below the free-shipping threshold.
#[must_use]
pub fn flat_shipping_fee() -> Decimal {
    Decimal::new(10_00, 2)
}

/// Shipping cost for a given subtotal.
///
/// Free only strictly above [`free_shipping_threshold`].
#[must_use]
pub fn shipping_cost(subtotal: Decimal) -> Decimal {
    if subtotal > free_shipping_threshold() {
        Decimal::ZERO
    } else {
        flat_shipping_fee()
    }
}

/// Errors from cart ledger operations.
///
/// Absent ids on `remove`/`set_quantity` are deliberately not errors; those
/// operations are defined as no-ops.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// `add` was called with a zero quantity. Use `remove` instead.
    #[error("quantity must be at least 1")]
    InvalidQuantity,
}

/// One product quantity in the cart.
///
/// Display fields are copied from the product at add-time so the cart can
/// render offline; they are never re-validated against the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Stable key; unique within a cart snapshot.
    pub product_id: ProductId,
    /// Price snapshotted when the product was first added.
    pub unit_price: Decimal,
    /// Always >= 1 while the line exists.
    pub quantity: u32,
    /// Display name snapshot.
    pub name: String,
    /// Image reference snapshot.
    #[serde(default)]
    pub image_url: String,
    /// Category label snapshot.
    #[serde(default)]
    pub category: String,
}

impl LineItem {
    /// Snapshot a product into a new line.
    #[must_use]
    pub fn snapshot(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id,
            unit_price: product.price,
            quantity,
            name: product.name.clone(),
            image_url: product.image_url.clone(),
            category: product.category.clone(),
        }
    }

    /// Extended price for this line (`unit_price * quantity`).
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Ordered collection of line items, insertion order preserved for display.
///
/// Order is not semantically significant to totals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartLedger {
    items: Vec<LineItem>,
}

impl CartLedger {
    /// Create an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Rebuild a ledger from persisted lines, re-establishing invariants.
    ///
    /// Lines with zero quantity are dropped and duplicate product ids are
    /// merged, so a ledger hydrated from a tampered or stale payload is
    /// still well-formed.
    #[must_use]
    pub fn from_lines(lines: Vec<LineItem>) -> Self {
        let mut ledger = Self::new();
        for line in lines {
            if line.quantity == 0 {
                continue;
            }
            match ledger.find_mut(line.product_id) {
                Some(existing) => existing.quantity += line.quantity,
                None => ledger.items.push(line),
            }
        }
        ledger
    }

    /// Add `quantity` units of `product`.
    ///
    /// If a line for the same product id already exists, only its quantity
    /// is incremented; the existing price and display snapshot are retained
    /// even if `product` now carries different data. Otherwise a new line is
    /// appended.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] if `quantity` is 0. Zero is
    /// rejected rather than clamped; removal is spelled `remove`.
    pub fn add(&mut self, product: &Product, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }
        self.merge(product, quantity);
        Ok(())
    }

    /// Merge a known-positive quantity of `product` into the ledger.
    pub(crate) fn merge(&mut self, product: &Product, quantity: u32) {
        match self.find_mut(product.id) {
            Some(existing) => existing.quantity += quantity,
            None => self.items.push(LineItem::snapshot(product, quantity)),
        }
    }

    /// Delete the line for `product_id`. No-op if absent.
    pub fn remove(&mut self, product_id: ProductId) {
        self.items.retain(|line| line.product_id != product_id);
    }

    /// Replace the quantity of an existing line.
    ///
    /// A quantity of 0 behaves exactly like [`Self::remove`]: zero quantity
    /// means "not in cart", never a retained zero-quantity row. No-op if the
    /// id is absent.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }
        if let Some(line) = self.find_mut(product_id) {
            line.quantity = quantity;
        }
    }

    /// Empty the cart unconditionally (used after order placement).
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of `unit_price * quantity` over all lines, in exact decimal
    /// arithmetic.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Sum of all quantities (the badge counter). Distinct from
    /// [`Self::len`], which counts distinct products.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    /// Subtotal plus threshold shipping.
    ///
    /// This is the cart-page total. The checkout page composes the
    /// primitives differently; see [`crate::checkout`].
    #[must_use]
    pub fn total(&self) -> Decimal {
        let subtotal = self.subtotal();
        subtotal + shipping_cost(subtotal)
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The line for `product_id`, if present.
    #[must_use]
    pub fn get(&self, product_id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|line| line.product_id == product_id)
    }

    /// Lines in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &LineItem> {
        self.items.iter()
    }

    /// Lines in insertion order, as a slice (used for persistence).
    #[must_use]
    pub fn lines(&self) -> &[LineItem] {
        &self.items
    }

    fn find_mut(&mut self, product_id: ProductId) -> Option<&mut LineItem> {
        self.items
            .iter_mut()
            .find(|line| line.product_id == product_id)
    }
}

impl<'a> IntoIterator for &'a CartLedger {
    type Item = &'a LineItem;
    type IntoIter = std::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
