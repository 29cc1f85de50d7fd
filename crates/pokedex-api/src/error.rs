//! Error types for catalog HTTP operations.
//!
//! Request-time errors are mapped to `CatalogPortError` at the port
//! boundary. Construction errors surface directly to the caller.

use thiserror::Error;

/// Result type alias for catalog HTTP operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors related to the catalog HTTP API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// API request failed with a non-success HTTP status.
    #[error("Catalog API request failed with status {status}: {url}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The client configuration cannot be used.
    #[error("Invalid catalog client configuration: {message}")]
    InvalidConfig {
        /// What was wrong with it
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
