//! Cache types for backend API responses.

use std::sync::Arc;

use sundrift_core::{Product, ProductId};

/// Cache key for catalog responses.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum CacheKey {
    /// Product listing, keyed by the serialized query parameters.
    Products(String),
    /// Single product by id.
    Product(ProductId),
    /// The category list.
    Categories,
}

/// Cached value types. `Arc`-wrapped so hits are cheap to clone.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Products(Arc<Vec<Product>>),
    Product(Arc<Product>),
    Categories(Arc<Vec<String>>),
}
