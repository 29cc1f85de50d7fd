//! Error types for catalog port operations.

use thiserror::Error;

/// Errors from catalog port operations.
///
/// The display strings are user-facing: the store and the detail view show
/// them verbatim. Transport and decoding details are kept in `reason`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogPortError {
    /// The list request failed (non-2xx, transport or decoding).
    #[error("Failed to fetch pokemons")]
    ListFailed {
        /// Underlying cause
        reason: String,
    },

    /// A detail request failed.
    #[error("Failed to fetch pokemon details")]
    DetailFailed {
        /// The requested detail reference
        url: String,
        /// Underlying cause
        reason: String,
    },
}

impl CatalogPortError {
    /// The underlying cause, for logs.
    pub fn reason(&self) -> &str {
        match self {
            Self::ListFailed { reason } | Self::DetailFailed { reason, .. } => reason,
        }
    }
}

/// Result type alias for catalog port operations.
pub type CatalogPortResult<T> = Result<T, CatalogPortError>;
