//! Port trait implementation for `CatalogClient`.
//!
//! Implements the core-owned `CatalogClientPort`, folding every adapter
//! error into the port's two failure kinds.

use async_trait::async_trait;
use pokedex_core::{
    CatalogClientPort, CatalogPortError, CatalogPortResult, Record, RecordDetails,
};
use tracing::warn;

use crate::client::CatalogClient;
use crate::error::ApiError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Human-readable cause kept in the port error for logs.
fn describe(err: &ApiError) -> String {
    match err {
        ApiError::RequestFailed { status, .. } => format!("status {status}"),
        ApiError::Network(e) if e.is_timeout() => "request timed out".to_string(),
        other => other.to_string(),
    }
}

fn map_list_error(err: &ApiError) -> CatalogPortError {
    warn!(error = %err, "List request failed");
    CatalogPortError::ListFailed {
        reason: describe(err),
    }
}

fn map_detail_error(url: &str, err: &ApiError) -> CatalogPortError {
    warn!(url, error = %err, "Detail request failed");
    CatalogPortError::DetailFailed {
        url: url.to_string(),
        reason: describe(err),
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> CatalogClientPort for CatalogClient<B> {
    async fn list_records(&self) -> CatalogPortResult<Vec<Record>> {
        self.list_page().await.map_err(|e| map_list_error(&e))
    }

    async fn fetch_record_details(&self, url: &str) -> CatalogPortResult<RecordDetails> {
        self.fetch_details(url)
            .await
            .map_err(|e| map_detail_error(url, &e))
    }
}
