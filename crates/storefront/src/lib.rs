//! Sundrift storefront state core.
//!
//! This crate holds everything the browser-side storefront keeps on the
//! client: the shopping cart ledger, the wishlist set, and the persistence
//! round-trip between them and a key-value store. It also provides the REST
//! client for the remote catalog/order backend that the (out-of-scope) view
//! layer consumes.
//!
//! # Architecture
//!
//! - [`cart`] / [`wishlist`] - purely synchronous owned state; no I/O
//! - [`store`] - the `StateStore` trait plus file and in-memory backends
//! - [`session`] - ties the two structures to a store with a strict
//!   mutate-then-persist sequence
//! - [`checkout`] - the two order-summary formulas (cart page vs. checkout
//!   page)
//! - [`api`] - async catalog/order/review client with response caching
//! - [`guard`] - generation counter guarding against stale fetch results
//!
//! The cart and wishlist never await anything; the API client is the only
//! async surface and its results are applied (or dropped) by the caller.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod guard;
pub mod session;
pub mod store;
pub mod wishlist;

pub use api::{ApiClient, ApiError};
pub use cart::{CartError, CartLedger, LineItem};
pub use checkout::{CartSummary, CheckoutSummary};
pub use config::{ConfigError, StorefrontConfig};
pub use guard::{FetchGuard, GenerationCounter};
pub use session::Session;
pub use store::{FileStore, MemoryStore, StateStore, StoreError};
pub use wishlist::{WishlistEntry, WishlistSet};
