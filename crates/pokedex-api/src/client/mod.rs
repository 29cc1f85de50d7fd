//! Catalog client for listing records and fetching their details.

mod detail;
mod list;

use crate::config::CatalogClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::ApiConfig;
use url::Url;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default catalog client using the reqwest HTTP backend.
pub type DefaultCatalogClient = CatalogClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the `PokeAPI` catalog.
///
/// Generic over its HTTP backend so tests can inject a fake one. Production
/// code should use [`DefaultCatalogClient::new`].
pub struct CatalogClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: ApiConfig,
}

impl DefaultCatalogClient {
    /// Create a client from a validated configuration.
    ///
    /// Fails when the base url does not parse, the page size is zero, or
    /// the HTTP client cannot be built.
    pub fn new(config: &CatalogClientConfig) -> ApiResult<Self> {
        let internal_config = Self::to_internal_config(config)?;
        let backend = ReqwestBackend::new(config)?;
        Ok(Self {
            backend,
            config: internal_config,
        })
    }

    /// Create a client with default configuration.
    pub fn default_client() -> ApiResult<Self> {
        Self::new(&CatalogClientConfig::default())
    }

    fn to_internal_config(config: &CatalogClientConfig) -> ApiResult<ApiConfig> {
        if config.page_size == 0 {
            return Err(ApiError::InvalidConfig {
                message: "page size must be at least 1".to_string(),
            });
        }
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidConfig {
                message: format!("base url cannot carry a path: {}", config.base_url),
            });
        }
        Ok(ApiConfig {
            base_url,
            page_size: config.page_size,
        })
    }
}

impl<B: HttpBackend> CatalogClient<B> {
    /// Create a client with a custom backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: ApiConfig, backend: B) -> Self {
        Self { backend, config }
    }
}
