//! The client session: cart + wishlist wired to a persistence backend.
//!
//! Every mutator follows the same sequence: update the owned structure,
//! then synchronously write the full snapshot through the store. The
//! persisted state is therefore never stale relative to memory, and no
//! reactive-framework scheduling is involved.
//!
//! Persistence failures never surface to the caller: the in-memory state
//! stays authoritative and the session degrades to memory-only for the rest
//! of its lifetime (the UI layer may translate that into a "couldn't save
//! your cart" notice).

use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use sundrift_core::{Product, ProductId};

use crate::cart::{CartError, CartLedger, LineItem};
use crate::store::{StateStore, keys};
use crate::wishlist::{WishlistEntry, WishlistSet};

/// A user session owning the cart ledger, the wishlist set, and the store
/// handle they persist through.
pub struct Session {
    cart: CartLedger,
    wishlist: WishlistSet,
    store: Box<dyn StateStore>,
    memory_only: bool,
}

impl Session {
    /// Start a session over `store`, hydrating both structures from any
    /// prior state.
    ///
    /// Corrupt or unreadable payloads hydrate the affected structure empty;
    /// they are never fatal.
    #[must_use]
    pub fn new(store: impl StateStore + 'static) -> Self {
        let store: Box<dyn StateStore> = Box::new(store);

        let lines: Vec<LineItem> = hydrate(store.as_ref(), keys::CART);
        let entries: Vec<WishlistEntry> = hydrate(store.as_ref(), keys::WISHLIST);
        let cart = CartLedger::from_lines(lines);
        let wishlist = WishlistSet::from_entries(entries);
        debug!(
            cart_lines = cart.len(),
            wishlist_entries = wishlist.len(),
            "session hydrated"
        );

        Self {
            cart,
            wishlist,
            store,
            memory_only: false,
        }
    }

    /// The current cart snapshot.
    #[must_use]
    pub fn cart(&self) -> &CartLedger {
        &self.cart
    }

    /// The current wishlist snapshot.
    #[must_use]
    pub fn wishlist(&self) -> &WishlistSet {
        &self.wishlist
    }

    /// Whether a persistence failure has downgraded this session to
    /// memory-only operation.
    #[must_use]
    pub fn is_memory_only(&self) -> bool {
        self.memory_only
    }

    /// Add `quantity` units of `product` to the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] if `quantity` is 0; the cart
    /// is left untouched and nothing is persisted.
    pub fn add_to_cart(&mut self, product: &Product, quantity: u32) -> Result<(), CartError> {
        self.cart.add(product, quantity)?;
        self.persist_cart();
        Ok(())
    }

    /// Remove a product from the cart. No-op if absent.
    pub fn remove_from_cart(&mut self, product_id: ProductId) {
        self.cart.remove(product_id);
        self.persist_cart();
    }

    /// Replace a cart line's quantity; 0 removes the line.
    pub fn set_cart_quantity(&mut self, product_id: ProductId, quantity: u32) {
        self.cart.set_quantity(product_id, quantity);
        self.persist_cart();
    }

    /// Empty the cart (after successful order placement).
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.persist_cart();
    }

    /// Save a product to the wishlist. Idempotent.
    pub fn add_to_wishlist(&mut self, product: &Product) {
        self.wishlist.add(product);
        self.persist_wishlist();
    }

    /// Remove a product from the wishlist. No-op if absent.
    pub fn remove_from_wishlist(&mut self, product_id: ProductId) {
        self.wishlist.remove(product_id);
        self.persist_wishlist();
    }

    /// Move a wishlist entry into the cart as one step, persisting both
    /// snapshots. Returns `false` (and persists nothing) if the id is not
    /// saved.
    pub fn move_to_cart(&mut self, product_id: ProductId) -> bool {
        if !self.wishlist.move_to_cart(product_id, &mut self.cart) {
            return false;
        }
        self.persist_cart();
        self.persist_wishlist();
        true
    }

    fn persist_cart(&mut self) {
        let payload = serde_json::to_string(self.cart.lines());
        self.persist(keys::CART, payload);
    }

    fn persist_wishlist(&mut self) {
        let payload = serde_json::to_string(self.wishlist.entries());
        self.persist(keys::WISHLIST, payload);
    }

    fn persist(&mut self, key: &str, payload: Result<String, serde_json::Error>) {
        if self.memory_only {
            return;
        }
        let payload = match payload {
            Ok(payload) => payload,
            Err(e) => {
                error!(key, "failed to serialize state snapshot: {e}");
                return;
            }
        };
        if let Err(e) = self.store.save(key, &payload) {
            error!(key, "failed to persist state, continuing memory-only: {e}");
            self.memory_only = true;
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("cart", &self.cart)
            .field("wishlist", &self.wishlist)
            .field("memory_only", &self.memory_only)
            .finish_non_exhaustive()
    }
}

/// Load and decode one key, treating every failure as "start empty".
fn hydrate<T: DeserializeOwned>(store: &dyn StateStore, key: &str) -> Vec<T> {
    let payload = match store.load(key) {
        Ok(Some(payload)) => payload,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(key, "failed to load persisted state, starting empty: {e}");
            return Vec::new();
        }
    };
    match serde_json::from_str(&payload) {
        Ok(items) => items,
        Err(e) => {
            warn!(key, "corrupt persisted state, starting empty: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::{Arc, Mutex};

    use rust_decimal::Decimal;

    use super::*;
    use crate::store::{MemoryStore, StoreError};

    /// Store handle that can outlive a session, simulating durable storage
    /// across a process restart.
    #[derive(Clone, Default)]
    struct SharedStore(Arc<Mutex<MemoryStore>>);

    impl StateStore for SharedStore {
        fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.0.lock().expect("store lock").load(key)
        }

        fn save(&mut self, key: &str, payload: &str) -> Result<(), StoreError> {
            self.0.lock().expect("store lock").save(key, payload)
        }
    }

    fn product(id: i64, price: &str) -> Product {
        Product::new(
            ProductId::new(id),
            format!("Product {id}"),
            price.parse().unwrap(),
            format!("https://cdn.example.com/{id}.jpg"),
            "Test".to_string(),
        )
    }

    /// Store whose saves always fail, for degradation tests.
    struct BrokenStore;

    impl StateStore for BrokenStore {
        fn load(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Ok(None)
        }

        fn save(&mut self, _key: &str, _payload: &str) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::other("quota exceeded")))
        }
    }

    #[test]
    fn test_mutation_persists_full_snapshot() {
        let store = SharedStore::default();

        let mut session = Session::new(store.clone());
        session.add_to_cart(&product(1, "20.00"), 2).unwrap();
        drop(session);

        // A fresh session over the same store sees the state.
        let restored = Session::new(store);
        assert_eq!(restored.cart().item_count(), 2);
        assert_eq!(
            restored.cart().get(ProductId::new(1)).unwrap().unit_price,
            Decimal::new(20_00, 2)
        );
    }

    #[test]
    fn test_corrupt_cart_starts_empty_wishlist_intact() {
        let mut store = MemoryStore::new();
        store.save(keys::CART, "{not json").unwrap();
        store
            .save(
                keys::WISHLIST,
                r#"[{"product_id":5,"unit_price":"9.99","name":"Saved"}]"#,
            )
            .unwrap();

        let session = Session::new(store);
        assert!(session.cart().is_empty());
        assert_eq!(session.wishlist().len(), 1);
        assert!(session.wishlist().contains(ProductId::new(5)));
    }

    #[test]
    fn test_failed_save_degrades_to_memory_only() {
        let mut session = Session::new(BrokenStore);
        assert!(!session.is_memory_only());

        session.add_to_cart(&product(1, "5.00"), 1).unwrap();

        // The mutation itself still took effect.
        assert!(session.is_memory_only());
        assert_eq!(session.cart().item_count(), 1);

        // Later mutations keep working without touching the store.
        session.add_to_cart(&product(2, "6.00"), 1).unwrap();
        assert_eq!(session.cart().len(), 2);
    }

    #[test]
    fn test_invalid_quantity_persists_nothing() {
        let mut session = Session::new(BrokenStore);
        assert!(session.add_to_cart(&product(1, "5.00"), 0).is_err());
        // The failing store was never hit, so no degradation happened.
        assert!(!session.is_memory_only());
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_move_to_cart_updates_both_snapshots() {
        let mut session = Session::new(MemoryStore::new());
        session.add_to_wishlist(&product(5, "12.00"));

        assert!(session.move_to_cart(ProductId::new(5)));
        assert!(!session.wishlist().contains(ProductId::new(5)));
        assert_eq!(session.cart().get(ProductId::new(5)).unwrap().quantity, 1);
    }

    #[test]
    fn test_move_to_cart_absent_is_noop() {
        let mut session = Session::new(MemoryStore::new());
        assert!(!session.move_to_cart(ProductId::new(5)));
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_clear_cart_after_order() {
        let mut session = Session::new(MemoryStore::new());
        session.add_to_cart(&product(1, "5.00"), 3).unwrap();
        session.clear_cart();
        assert!(session.cart().is_empty());
        assert_eq!(session.cart().item_count(), 0);
    }
}
