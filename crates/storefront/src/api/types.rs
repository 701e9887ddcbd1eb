//! Request and response types for the backend API.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use sundrift_core::{ProductId, ReviewId};

use crate::cart::CartLedger;

/// Sort orders accepted by the product listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductSort {
    /// Catalog order ("Featured").
    #[default]
    Featured,
    /// Price, low to high.
    Price,
    /// Average rating.
    Rating,
    /// Alphabetical by name.
    Name,
}

impl ProductSort {
    /// Wire value for the `sort` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Featured => "id",
            Self::Price => "price",
            Self::Rating => "rating",
            Self::Name => "name",
        }
    }
}

/// Filter/sort parameter set for the product listing call.
///
/// Only parameters that were actually set are sent; the UI's "all"
/// category is client-side shorthand for "no category filter" and never
/// reaches the wire.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    category: Option<String>,
    search: Option<String>,
    sort: Option<ProductSort>,
    min_price: Option<Decimal>,
    max_price: Option<Decimal>,
}

impl ProductQuery {
    /// An unfiltered query (full catalog, featured order).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter to one category. Passing `"all"` clears the filter.
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = (category != "all").then_some(category);
        self
    }

    /// Full-text search term. Empty terms clear the filter.
    #[must_use]
    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.search = (!term.is_empty()).then_some(term);
        self
    }

    /// Sort order.
    #[must_use]
    pub const fn sort(mut self, sort: ProductSort) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Inclusive price range bounds.
    #[must_use]
    pub const fn price_range(mut self, min: Decimal, max: Decimal) -> Self {
        self.min_price = Some(min);
        self.max_price = Some(max);
        self
    }

    /// Query parameters for the request, in a stable order, containing only
    /// the set fields.
    #[must_use]
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(category) = &self.category {
            params.push(("category", category.clone()));
        }
        if let Some(search) = &self.search {
            params.push(("search", search.clone()));
        }
        if let Some(sort) = self.sort {
            params.push(("sort", sort.as_str().to_string()));
        }
        if let Some(min) = self.min_price {
            params.push(("min_price", min.to_string()));
        }
        if let Some(max) = self.max_price {
            params.push(("max_price", max.to_string()));
        }
        params
    }

    /// Stable cache key for this parameter set.
    #[must_use]
    pub fn cache_key(&self) -> String {
        self.to_params()
            .into_iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// A product review as returned by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub product_id: ProductId,
    pub user_name: String,
    /// 1-5 stars.
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// A review submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewInput {
    pub product_id: ProductId,
    pub user_name: String,
    /// 1-5 stars.
    pub rating: u8,
    pub comment: String,
}

/// Customer contact and shipping details collected by the checkout form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerInfo {
    pub user_name: String,
    pub user_email: String,
    pub user_phone: String,
    /// Single joined line: street, city, state, zip.
    pub shipping_address: String,
}

/// One order line as submitted to the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItemInput {
    pub product_id: ProductId,
    pub quantity: u32,
    /// Unit price as snapshotted in the cart.
    pub price: Decimal,
}

/// An order submission for `POST /api/orders`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderInput {
    pub user_name: String,
    pub user_email: String,
    pub user_phone: String,
    pub shipping_address: String,
    /// The backend receives the untaxed subtotal; tax presentation is a
    /// checkout-page concern (see [`crate::checkout`]).
    pub total_amount: Decimal,
    pub items: Vec<OrderItemInput>,
}

impl OrderInput {
    /// Build an order from the current cart and the customer's details.
    #[must_use]
    pub fn from_cart(customer: CustomerInfo, cart: &CartLedger) -> Self {
        Self {
            user_name: customer.user_name,
            user_email: customer.user_email,
            user_phone: customer.user_phone,
            shipping_address: customer.shipping_address,
            total_amount: cart.subtotal(),
            items: cart
                .iter()
                .map(|line| OrderItemInput {
                    product_id: line.product_id,
                    quantity: line.quantity,
                    price: line.unit_price,
                })
                .collect(),
        }
    }
}
