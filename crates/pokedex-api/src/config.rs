//! Public configuration for the catalog client.
//!
//! The internal config (see `models::ApiConfig`) is derived from this once
//! the values have been validated.

use std::time::Duration;

/// Default list endpoint.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/pokemon";

/// Default number of records requested by a list call.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Configuration for the catalog client.
///
/// # Example
///
/// ```
/// use pokedex_api::CatalogClientConfig;
/// use std::time::Duration;
///
/// let config = CatalogClientConfig::new()
///     .with_page_size(151)
///     .with_timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct CatalogClientConfig {
    /// List endpoint; record urls come back from the API itself
    pub(crate) base_url: String,
    /// `limit` query parameter of the list call
    pub(crate) page_size: u32,
    /// Per-request timeout
    pub(crate) timeout: Duration,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
}

impl Default for CatalogClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout: Duration::from_secs(30),
            user_agent: concat!("pokedex-api/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl CatalogClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the list endpoint.
    ///
    /// Defaults to [`DEFAULT_BASE_URL`].
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set how many records a list call requests.
    ///
    /// Defaults to 20. Zero is rejected when the client is built.
    #[must_use]
    pub const fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}
