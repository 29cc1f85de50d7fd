//! In-crate test doubles for service tests.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::{Record, RecordAbility, RecordDetails, RecordType};
use crate::events::StoreEvent;
use crate::ports::{CatalogClientPort, CatalogPortError, CatalogPortResult, StoreEventEmitter};

pub fn bulbasaur() -> Record {
    Record::summary(1, "bulbasaur", "https://pokeapi.co/api/v2/pokemon/1/")
}

pub fn ivysaur() -> Record {
    Record::summary(2, "ivysaur", "https://pokeapi.co/api/v2/pokemon/2/")
}

pub fn bulbasaur_details() -> RecordDetails {
    RecordDetails {
        id: 1,
        name: "bulbasaur".to_string(),
        height: 7,
        weight: 69,
        types: vec![RecordType::new("grass"), RecordType::new("poison")],
        abilities: vec![
            RecordAbility::new("overgrow", false),
            RecordAbility::new("chlorophyll", true),
        ],
        sprite: Some("https://example.com/1.png".to_string()),
    }
}

/// Catalog fake with queued list results and per-url detail results.
#[derive(Default)]
pub struct FakeCatalog {
    lists: Mutex<VecDeque<CatalogPortResult<Vec<Record>>>>,
    details: Mutex<HashMap<String, CatalogPortResult<RecordDetails>>>,
    list_calls: AtomicUsize,
    detail_calls: AtomicUsize,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a result for the next `list_records` call.
    pub fn with_list(self, result: CatalogPortResult<Vec<Record>>) -> Self {
        self.lists.lock().unwrap().push_back(result);
        self
    }

    pub fn with_details(self, url: &str, result: CatalogPortResult<RecordDetails>) -> Self {
        self.details
            .lock()
            .unwrap()
            .insert(url.to_string(), result);
        self
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogClientPort for FakeCatalog {
    async fn list_records(&self) -> CatalogPortResult<Vec<Record>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.lists
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn fetch_record_details(&self, url: &str) -> CatalogPortResult<RecordDetails> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        self.details
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .unwrap_or_else(|| {
                Err(CatalogPortError::DetailFailed {
                    url: url.to_string(),
                    reason: "status 404".to_string(),
                })
            })
    }
}

/// Emitter that keeps every event it receives.
#[derive(Default, Clone)]
pub struct RecordingEmitter {
    events: std::sync::Arc<Mutex<Vec<StoreEvent>>>,
}

impl RecordingEmitter {
    pub fn names(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().iter().map(StoreEvent::name).collect()
    }
}

impl StoreEventEmitter for RecordingEmitter {
    fn emit(&self, event: StoreEvent) {
        self.events.lock().unwrap().push(event);
    }

    fn clone_box(&self) -> Box<dyn StoreEventEmitter> {
        Box::new(self.clone())
    }
}
