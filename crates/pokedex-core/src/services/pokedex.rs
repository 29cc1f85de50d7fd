//! `Pokedex` - the primary application facade.
//!
//! Adapters (CLI, GUI) receive a `Pokedex` instance and use it to reach the
//! store, list views and detail visits. It is built once per session at the
//! adapter's composition root.

use std::sync::Arc;

use crate::domain::{Record, generate_record, new_record_id};
use crate::ports::{CatalogClientPort, StoreEventEmitter};

use super::{DetailController, RecordListView, RecordStore};

/// The core application facade.
///
/// # Example
///
/// ```ignore
/// let client = Arc::new(DefaultCatalogClient::new(&CatalogClientConfig::default())?);
/// let pokedex = Pokedex::open(client, Arc::new(NoopEmitter)).await;
///
/// let rows = pokedex.list_view().rows();
/// ```
pub struct Pokedex {
    store: Arc<RecordStore>,
    client: Arc<dyn CatalogClientPort>,
}

impl Pokedex {
    /// Build the facade around an existing store.
    pub fn new(store: Arc<RecordStore>, client: Arc<dyn CatalogClientPort>) -> Self {
        Self { store, client }
    }

    /// Build the facade and run the store's seed load.
    pub async fn open(
        client: Arc<dyn CatalogClientPort>,
        emitter: Arc<dyn StoreEventEmitter>,
    ) -> Self {
        let store = RecordStore::open(client.clone(), emitter).await;
        Self { store, client }
    }

    /// Access the record store.
    pub const fn store(&self) -> &Arc<RecordStore> {
        &self.store
    }

    /// A fresh list view with an empty search term.
    pub fn list_view(&self) -> RecordListView {
        RecordListView::new(self.store.clone())
    }

    /// Start a detail visit for `id`.
    pub fn open_detail(&self, id: i64) -> DetailController {
        DetailController::open(self.store.clone(), self.client.clone(), id)
    }

    /// Generate a detail-complete record, add it, and return a copy.
    pub fn add_synthetic(&self) -> Record {
        let record = generate_record(&mut rand::rng(), new_record_id());
        self.store.add(record.clone());
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::NoopEmitter;
    use crate::services::DetailState;
    use crate::services::testing::{FakeCatalog, bulbasaur, ivysaur};

    #[tokio::test]
    async fn test_open_seeds_store() {
        let client = Arc::new(FakeCatalog::new().with_list(Ok(vec![ivysaur(), bulbasaur()])));
        let pokedex = Pokedex::open(client, Arc::new(NoopEmitter::new())).await;

        assert_eq!(pokedex.store().count(), 2);
        assert_eq!(pokedex.list_view().rows()[0].name, "bulbasaur");
    }

    #[tokio::test]
    async fn test_synthetic_record_skips_fetch() {
        let client = Arc::new(FakeCatalog::new());
        let pokedex = Pokedex::open(client.clone(), Arc::new(NoopEmitter::new())).await;

        let added = pokedex.add_synthetic();
        assert_eq!(pokedex.store().count(), 1);

        let mut detail = pokedex.open_detail(added.id);
        let state = detail.load().await;
        assert!(matches!(state, DetailState::UsingCached(_)));
        assert_eq!(client.detail_calls(), 0);
    }
}
