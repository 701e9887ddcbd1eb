//! Backend API client implementation.

use std::sync::Arc;

use moka::future::Cache;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use sundrift_core::{Product, ProductId};

use crate::api::ApiError;
use crate::api::cache::{CacheKey, CacheValue};
use crate::api::types::{OrderInput, ProductQuery, Review, ReviewInput};
use crate::config::StorefrontConfig;

/// One row of the `GET /api/categories` response.
#[derive(Debug, Deserialize)]
struct CategoryRow {
    category: String,
}

/// Client for the catalog/order backend.
///
/// Cheap to clone; product and category responses are cached with the
/// configured TTL.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: String,
    cache: Cache<CacheKey, CacheValue>,
}

impl ApiClient {
    /// Create a new client from configuration.
    #[must_use]
    pub fn new(config: &StorefrontConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(config.cache_ttl)
            .build();

        Self {
            inner: Arc::new(ApiClientInner {
                client: reqwest::Client::new(),
                base_url: config.api_url.as_str().trim_end_matches('/').to_string(),
                cache,
            }),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{path}", self.inner.base_url)
    }

    /// Decode a response, reading the body as text first so a shape
    /// mismatch reports the offending payload position.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// List products matching `query`.
    ///
    /// Results are cached per parameter set.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request or decoding fails.
    #[instrument(skip(self))]
    pub async fn list_products(&self, query: &ProductQuery) -> Result<Arc<Vec<Product>>, ApiError> {
        let key = CacheKey::Products(query.cache_key());
        if let Some(CacheValue::Products(products)) = self.inner.cache.get(&key).await {
            debug!("product list served from cache");
            return Ok(products);
        }

        let response = self
            .inner
            .client
            .get(self.endpoint("products"))
            .query(&query.to_params())
            .send()
            .await?;
        let products: Arc<Vec<Product>> = Arc::new(Self::decode(response).await?);

        self.inner
            .cache
            .insert(key, CacheValue::Products(Arc::clone(&products)))
            .await;
        Ok(products)
    }

    /// Fetch a single product by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the backend answers 404, other
    /// [`ApiError`] variants for transport or decoding failures.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> Result<Arc<Product>, ApiError> {
        let key = CacheKey::Product(id);
        if let Some(CacheValue::Product(product)) = self.inner.cache.get(&key).await {
            return Ok(product);
        }

        let response = self
            .inner
            .client
            .get(self.endpoint(&format!("products/{id}")))
            .send()
            .await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(format!("product {id}")));
        }
        let product: Arc<Product> = Arc::new(Self::decode(response).await?);

        self.inner
            .cache
            .insert(key, CacheValue::Product(Arc::clone(&product)))
            .await;
        Ok(product)
    }

    /// List all category labels.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request or decoding fails.
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Arc<Vec<String>>, ApiError> {
        if let Some(CacheValue::Categories(categories)) =
            self.inner.cache.get(&CacheKey::Categories).await
        {
            return Ok(categories);
        }

        let response = self
            .inner
            .client
            .get(self.endpoint("categories"))
            .send()
            .await?;
        let rows: Vec<CategoryRow> = Self::decode(response).await?;
        let categories: Arc<Vec<String>> =
            Arc::new(rows.into_iter().map(|row| row.category).collect());

        self.inner
            .cache
            .insert(
                CacheKey::Categories,
                CacheValue::Categories(Arc::clone(&categories)),
            )
            .await;
        Ok(categories)
    }

    /// Submit an order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend rejects the
    /// order with a non-success status.
    #[instrument(skip(self, order), fields(items = order.items.len()))]
    pub async fn submit_order(&self, order: &OrderInput) -> Result<(), ApiError> {
        let response = self
            .inner
            .client
            .post(self.endpoint("orders"))
            .json(order)
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status(status.as_u16()))
        }
    }

    /// List reviews for a product. Always fetched fresh.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request or decoding fails.
    #[instrument(skip(self))]
    pub async fn list_reviews(&self, product_id: ProductId) -> Result<Vec<Review>, ApiError> {
        let response = self
            .inner
            .client
            .get(self.endpoint(&format!("products/{product_id}/reviews")))
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Submit a product review.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend rejects the
    /// review with a non-success status.
    #[instrument(skip(self, review), fields(product_id = %review.product_id))]
    pub async fn submit_review(&self, review: &ReviewInput) -> Result<(), ApiError> {
        let response = self
            .inner
            .client
            .post(self.endpoint("reviews"))
            .json(review)
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status(status.as_u16()))
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}
