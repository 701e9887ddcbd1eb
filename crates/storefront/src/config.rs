//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SUNDRIFT_API_URL` - Base URL of the catalog/order backend
//!   (e.g., `https://api.example.com`)
//!
//! ## Optional
//! - `SUNDRIFT_STATE_DIR` - Directory for persisted cart/wishlist state;
//!   when unset the session runs memory-only
//! - `SUNDRIFT_CACHE_TTL_SECS` - API response cache TTL (default: 300)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default API response cache TTL in seconds.
const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Base URL of the remote catalog/order API
    pub api_url: Url,
    /// Directory for persisted state; `None` means memory-only sessions
    pub state_dir: Option<PathBuf>,
    /// API response cache time-to-live
    pub cache_ttl: Duration,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is honored in development via `dotenvy`; missing
    /// `.env` is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a required variable is absent or a value
    /// fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let api_url = required_env("SUNDRIFT_API_URL")?;
        let api_url = Url::parse(&api_url)
            .map_err(|e| ConfigError::InvalidEnvVar("SUNDRIFT_API_URL".to_string(), e.to_string()))?;

        let state_dir = optional_env("SUNDRIFT_STATE_DIR").map(PathBuf::from);

        let cache_ttl_secs = match optional_env("SUNDRIFT_CACHE_TTL_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvVar("SUNDRIFT_CACHE_TTL_SECS".to_string(), e.to_string())
            })?,
            None => DEFAULT_CACHE_TTL_SECS,
        };

        Ok(Self {
            api_url,
            state_dir,
            cache_ttl: Duration::from_secs(cache_ttl_secs),
        })
    }
}

/// Get a required environment variable.
fn required_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Get an optional environment variable, treating empty values as unset.
fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
