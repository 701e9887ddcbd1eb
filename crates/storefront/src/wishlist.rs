//! The wishlist: saved-product snapshots, unique by product id.
//!
//! Entries keep insertion order for stable display; membership checks go
//! through a hash index so `contains` stays O(1) as the list grows.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use sundrift_core::{Product, ProductId};

use crate::cart::CartLedger;

/// A saved product's display snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistEntry {
    /// Stable key; unique within the wishlist.
    pub product_id: ProductId,
    /// Price at save-time.
    pub unit_price: Decimal,
    /// Display name snapshot.
    pub name: String,
    /// Image reference snapshot.
    #[serde(default)]
    pub image_url: String,
    /// Category label snapshot.
    #[serde(default)]
    pub category: String,
}

impl WishlistEntry {
    /// Snapshot a product into an entry.
    #[must_use]
    pub fn snapshot(product: &Product) -> Self {
        Self {
            product_id: product.id,
            unit_price: product.price,
            name: product.name.clone(),
            image_url: product.image_url.clone(),
            category: product.category.clone(),
        }
    }

    /// Rebuild the structural product record from the snapshot.
    #[must_use]
    pub fn to_product(&self) -> Product {
        Product::new(
            self.product_id,
            self.name.clone(),
            self.unit_price,
            self.image_url.clone(),
            self.category.clone(),
        )
    }
}

/// Insertion-ordered set of saved products, unique by product id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WishlistSet {
    entries: Vec<WishlistEntry>,
    index: HashSet<ProductId>,
}

impl WishlistSet {
    /// Create an empty wishlist.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a wishlist from persisted entries, dropping duplicate ids.
    #[must_use]
    pub fn from_entries(entries: Vec<WishlistEntry>) -> Self {
        let mut wishlist = Self::new();
        for entry in entries {
            if wishlist.index.insert(entry.product_id) {
                wishlist.entries.push(entry);
            }
        }
        wishlist
    }

    /// Save a product. Idempotent: a repeat add is a no-op and the original
    /// snapshot is preserved, even if `product` now carries different data.
    pub fn add(&mut self, product: &Product) {
        if self.index.insert(product.id) {
            self.entries.push(WishlistEntry::snapshot(product));
        }
    }

    /// Delete the entry for `product_id`. No-op if absent.
    pub fn remove(&mut self, product_id: ProductId) {
        if self.index.remove(&product_id) {
            self.entries.retain(|entry| entry.product_id != product_id);
        }
    }

    /// Membership test, O(1) via the hash index.
    #[must_use]
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.index.contains(&product_id)
    }

    /// Move an entry into the cart as a single step.
    ///
    /// Adds one unit of the saved snapshot to `cart`, then removes the entry
    /// here. If `product_id` is not saved, neither structure changes and
    /// `false` is returned.
    pub fn move_to_cart(&mut self, product_id: ProductId, cart: &mut CartLedger) -> bool {
        let Some(entry) = self
            .entries
            .iter()
            .find(|entry| entry.product_id == product_id)
        else {
            return false;
        };
        cart.merge(&entry.to_product(), 1);
        self.remove(product_id);
        true
    }

    /// Number of saved products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the wishlist is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &WishlistEntry> {
        self.entries.iter()
    }

    /// Entries in insertion order, as a slice (used for persistence).
    #[must_use]
    pub fn entries(&self) -> &[WishlistEntry] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a WishlistSet {
    type Item = &'a WishlistEntry;
    type IntoIter = std::slice::Iter<'a, WishlistEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
