//! Remote catalog client port trait.

use super::error::CatalogPortResult;
use crate::domain::{Record, RecordDetails};
use async_trait::async_trait;

/// Port trait for the remote record catalog.
///
/// # Design
///
/// - Uses core-owned types, not wire types
/// - Returns `CatalogPortError` for all failures
/// - Plain request/response: no retries, no caching
#[async_trait]
pub trait CatalogClientPort: Send + Sync {
    /// List record summaries (one fixed-size page).
    ///
    /// Ids are parsed from each record's url, falling back to position.
    async fn list_records(&self) -> CatalogPortResult<Vec<Record>>;

    /// Fetch the detail payload for one record.
    ///
    /// # Arguments
    ///
    /// * `url` - The record's detail reference, as stored in [`Record::url`]
    async fn fetch_record_details(&self, url: &str) -> CatalogPortResult<RecordDetails>;
}
