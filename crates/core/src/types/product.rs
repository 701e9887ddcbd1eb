//! The structural product record consumed throughout the storefront.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;

/// A product as served by the remote catalog API.
///
/// Only the fields the storefront core actually reads are modeled; any extra
/// fields the backend sends are ignored during deserialization. `description`,
/// `stock`, and `rating` are optional because list endpoints may omit them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Stable catalog identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price in the store currency.
    pub price: Decimal,
    /// Primary image URL.
    pub image_url: String,
    /// Category label (e.g., "Electronics").
    pub category: String,
    /// Long-form description, when the endpoint provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Units in stock, when the endpoint provides it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    /// Average review rating, when the endpoint provides it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

impl Product {
    /// Create a product with just the required fields.
    ///
    /// Mostly useful in tests and for callers that build products from
    /// snapshots rather than API responses.
    #[must_use]
    pub const fn new(
        id: ProductId,
        name: String,
        price: Decimal,
        image_url: String,
        category: String,
    ) -> Self {
        Self {
            id,
            name,
            price,
            image_url,
            category,
            description: None,
            stock: None,
            rating: None,
        }
    }
}
