//! REST client for the remote catalog/order backend.
//!
//! # Architecture
//!
//! - Plain JSON-over-HTTP via `reqwest`; the backend is the source of truth
//!   and nothing is synced locally
//! - Product and category responses cached in-process via `moka`
//!   (TTL from [`crate::config::StorefrontConfig::cache_ttl`])
//! - No retry policy: a failed call surfaces once and the caller decides
//!   what the user sees
//!
//! # Endpoints
//!
//! - `GET /api/products` (filter/sort/search/price-range parameters)
//! - `GET /api/products/{id}`
//! - `GET /api/products/{id}/reviews`, `POST /api/reviews`
//! - `GET /api/categories`
//! - `POST /api/orders`
//!
//! # Example
//!
//! ```rust,ignore
//! use sundrift_storefront::api::{ApiClient, ProductQuery, ProductSort};
//!
//! let client = ApiClient::new(&config);
//! let products = client
//!     .list_products(&ProductQuery::new().category("Electronics").sort(ProductSort::Price))
//!     .await?;
//! ```

mod cache;
mod client;
mod types;

pub use client::ApiClient;
pub use types::{
    CustomerInfo, OrderInput, OrderItemInput, ProductQuery, ProductSort, Review, ReviewInput,
};

use thiserror::Error;

/// Errors that can occur when calling the backend API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON shape.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Backend answered with a non-success status.
    #[error("API returned status {0}")]
    Status(u16),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ApiError::NotFound("product 123".to_string());
        assert_eq!(err.to_string(), "Not found: product 123");

        let err = ApiError::Status(502);
        assert_eq!(err.to_string(), "API returned status 502");
    }
}
