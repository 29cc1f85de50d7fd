//! Record store - the session's single source of truth.
//!
//! The store owns the record collection and the loading/error status of the
//! list fetch. Every mutation funnels through its methods; other components
//! only ever see snapshots.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info, warn};

use crate::domain::Record;
use crate::events::{LoadKind, StoreEvent};
use crate::ports::{CatalogClientPort, NoopEmitter, StoreEventEmitter};

/// Loading/error status of the collection fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreStatus {
    pub loading: bool,
    /// Human-readable error from the last load, cleared by the next one.
    pub error: Option<String>,
}

/// Result of an `initialize` or `reload` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The collection was replaced with this many records.
    Loaded(usize),
    /// The fetch failed; the store error holds this message.
    Failed(String),
    /// A newer load started before this one resolved; the result was dropped.
    Superseded,
}

#[derive(Debug, Default)]
struct StoreState {
    records: Vec<Record>,
    status: StoreStatus,
    /// Generation of the most recently started load.
    generation: u64,
}

/// In-memory record store with injected catalog client.
pub struct RecordStore {
    client: Arc<dyn CatalogClientPort>,
    emitter: Arc<dyn StoreEventEmitter>,
    state: RwLock<StoreState>,
}

impl RecordStore {
    /// Create an empty, unseeded store.
    pub fn new(client: Arc<dyn CatalogClientPort>, emitter: Arc<dyn StoreEventEmitter>) -> Self {
        Self {
            client,
            emitter,
            state: RwLock::new(StoreState::default()),
        }
    }

    /// Create an empty store that discards its events.
    pub fn without_events(client: Arc<dyn CatalogClientPort>) -> Self {
        Self::new(client, Arc::new(NoopEmitter::new()))
    }

    /// Create a store and run its seed load once.
    ///
    /// A failed seed load is not an error here: it is recorded in the
    /// store's status like any other load failure.
    pub async fn open(
        client: Arc<dyn CatalogClientPort>,
        emitter: Arc<dyn StoreEventEmitter>,
    ) -> Arc<Self> {
        let store = Arc::new(Self::new(client, emitter));
        store.initialize().await;
        store
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Loading
    // ─────────────────────────────────────────────────────────────────────────

    /// Fetch the collection and replace the current one on success.
    pub async fn initialize(&self) -> LoadOutcome {
        self.load(LoadKind::Initial).await
    }

    /// Like [`initialize`](Self::initialize), but empties the collection
    /// before the fetch resolves.
    pub async fn reload(&self) -> LoadOutcome {
        self.load(LoadKind::Reload).await
    }

    async fn load(&self, kind: LoadKind) -> LoadOutcome {
        let generation = {
            let mut state = self.write();
            state.generation += 1;
            state.status.loading = true;
            state.status.error = None;
            if kind == LoadKind::Reload {
                state.records.clear();
            }
            state.generation
        };
        debug!(?kind, generation, "Record load started");
        self.emitter.emit(StoreEvent::LoadStarted { kind, generation });

        let result = self.client.list_records().await;

        let (outcome, event) = {
            let mut state = self.write();
            if state.generation != generation {
                (
                    LoadOutcome::Superseded,
                    StoreEvent::LoadSuperseded { kind, generation },
                )
            } else {
                state.status.loading = false;
                match result {
                    Ok(records) => {
                        let count = records.len();
                        state.records = records;
                        (
                            LoadOutcome::Loaded(count),
                            StoreEvent::LoadCompleted {
                                kind,
                                generation,
                                count,
                            },
                        )
                    }
                    Err(e) => {
                        let message = e.to_string();
                        warn!(reason = e.reason(), "Record load failed");
                        state.status.error = Some(message.clone());
                        (
                            LoadOutcome::Failed(message.clone()),
                            StoreEvent::LoadFailed {
                                kind,
                                generation,
                                error: message,
                            },
                        )
                    }
                }
            }
        };

        match &outcome {
            LoadOutcome::Loaded(count) => info!(?kind, count, "Records loaded"),
            LoadOutcome::Superseded => warn!(?kind, generation, "Discarding superseded load"),
            LoadOutcome::Failed(_) => {}
        }
        self.emitter.emit(event);
        outcome
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Append a record. Id uniqueness is not checked.
    pub fn add(&self, record: Record) {
        let id = record.id;
        self.write().records.push(record);
        debug!(id, "Record added");
        self.emitter.emit(StoreEvent::record_added(id));
    }

    /// Shallow-merge `record` into the stored record with the same id.
    ///
    /// Returns `false` (and changes nothing) when no record matches.
    pub fn update(&self, record: &Record) -> bool {
        let found = {
            let mut state = self.write();
            if let Some(existing) = state.records.iter_mut().find(|r| r.id == record.id) {
                existing.merge_from(record);
                true
            } else {
                false
            }
        };
        if found {
            self.emitter.emit(StoreEvent::record_updated(record.id));
        } else {
            debug!(id = record.id, "Update ignored, no such record");
        }
        found
    }

    /// Remove the first record with this id.
    ///
    /// Returns `false` when no record matches.
    pub fn remove(&self, id: i64) -> bool {
        let removed = {
            let mut state = self.write();
            state
                .records
                .iter()
                .position(|r| r.id == id)
                .map(|index| state.records.remove(index))
                .is_some()
        };
        if removed {
            self.emitter.emit(StoreEvent::record_removed(id));
        }
        removed
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reads
    // ─────────────────────────────────────────────────────────────────────────

    /// Number of records in the collection.
    pub fn count(&self) -> usize {
        self.read().records.len()
    }

    /// Snapshot of the collection in storage order.
    pub fn records(&self) -> Vec<Record> {
        self.read().records.clone()
    }

    /// Snapshot of one record.
    pub fn get(&self, id: i64) -> Option<Record> {
        self.read().records.iter().find(|r| r.id == id).cloned()
    }

    pub fn status(&self) -> StoreStatus {
        self.read().status.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.read().status.loading
    }

    pub fn error(&self) -> Option<String> {
        self.read().status.error.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::CatalogPortError;
    use crate::services::testing::{FakeCatalog, RecordingEmitter, bulbasaur, ivysaur};

    fn store_with(client: FakeCatalog) -> RecordStore {
        RecordStore::without_events(Arc::new(client))
    }

    #[tokio::test]
    async fn test_initialize_replaces_collection() {
        let store = store_with(FakeCatalog::new().with_list(Ok(vec![bulbasaur(), ivysaur()])));

        let outcome = store.initialize().await;

        assert_eq!(outcome, LoadOutcome::Loaded(2));
        assert_eq!(store.count(), 2);
        assert_eq!(store.status(), StoreStatus::default());
    }

    #[tokio::test]
    async fn test_initialize_failure_sets_error_and_keeps_collection() {
        let store = store_with(FakeCatalog::new().with_list(Err(CatalogPortError::ListFailed {
            reason: "status 500".to_string(),
        })));

        let outcome = store.initialize().await;

        assert_eq!(outcome, LoadOutcome::Failed("Failed to fetch pokemons".to_string()));
        assert_eq!(store.error().as_deref(), Some("Failed to fetch pokemons"));
        assert!(!store.is_loading());
        assert_eq!(store.count(), 0);
    }

    #[tokio::test]
    async fn test_next_load_clears_error() {
        let store = store_with(
            FakeCatalog::new()
                .with_list(Err(CatalogPortError::ListFailed {
                    reason: "offline".to_string(),
                }))
                .with_list(Ok(vec![bulbasaur()])),
        );

        store.initialize().await;
        assert!(store.error().is_some());

        store.reload().await;
        assert!(store.error().is_none());
        assert_eq!(store.count(), 1);
    }

    #[tokio::test]
    async fn test_reload_failure_leaves_collection_empty() {
        let store = store_with(
            FakeCatalog::new()
                .with_list(Ok(vec![bulbasaur(), ivysaur()]))
                .with_list(Err(CatalogPortError::ListFailed {
                    reason: "offline".to_string(),
                })),
        );

        store.initialize().await;
        store.reload().await;

        assert_eq!(store.count(), 0);
        assert_eq!(store.error().as_deref(), Some("Failed to fetch pokemons"));
    }

    #[tokio::test]
    async fn test_open_seeds_once() {
        let client = Arc::new(FakeCatalog::new().with_list(Ok(vec![bulbasaur()])));
        let store = RecordStore::open(client.clone(), Arc::new(NoopEmitter::new())).await;

        assert_eq!(store.count(), 1);
        assert_eq!(client.list_calls(), 1);
    }

    #[test]
    fn test_add_appends_without_validation() {
        let store = store_with(FakeCatalog::new());
        store.add(bulbasaur());
        store.add(bulbasaur());
        assert_eq!(store.count(), 2);
        assert_eq!(store.records()[1].id, 1);
    }

    #[test]
    fn test_update_merges_by_id() {
        let store = store_with(FakeCatalog::new());
        store.add(bulbasaur());
        store.add(ivysaur());

        let update = Record {
            height: Some(7),
            ..bulbasaur()
        };
        assert!(store.update(&update));
        assert!(store.update(&update));

        let stored = store.get(1).unwrap();
        assert_eq!(stored.height, Some(7));
        assert_eq!(stored.name, "bulbasaur");
        assert_eq!(store.get(2).unwrap(), ivysaur());
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let store = store_with(FakeCatalog::new());
        store.add(bulbasaur());

        assert!(!store.update(&Record::summary(99, "ghost", "u")));
        assert_eq!(store.records(), vec![bulbasaur()]);
    }

    #[test]
    fn test_remove_twice() {
        let store = store_with(FakeCatalog::new());
        store.add(bulbasaur());
        store.add(ivysaur());

        assert!(store.remove(1));
        assert!(!store.remove(1));
        assert_eq!(store.records(), vec![ivysaur()]);
    }

    #[test]
    fn test_remove_only_first_match() {
        let store = store_with(FakeCatalog::new());
        store.add(bulbasaur());
        store.add(bulbasaur());

        store.remove(1);
        assert_eq!(store.count(), 1);
    }

    #[tokio::test]
    async fn test_mutations_emit_events() {
        let emitter = Arc::new(RecordingEmitter::default());
        let store = RecordStore::new(
            Arc::new(FakeCatalog::new().with_list(Ok(vec![bulbasaur()]))),
            emitter.clone(),
        );

        store.initialize().await;
        store.add(ivysaur());
        store.update(&ivysaur());
        store.remove(2);
        store.remove(2);

        assert_eq!(
            emitter.names(),
            vec![
                "load_started",
                "load_completed",
                "record_added",
                "record_updated",
                "record_removed",
            ]
        );
    }
}
