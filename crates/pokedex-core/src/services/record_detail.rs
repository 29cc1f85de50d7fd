//! Detail controller - per-visit detail loading and edit reconciliation.
//!
//! One controller corresponds to one visit of a record's detail view. It
//! makes sure the record has its detail fields (fetching them at most once),
//! writes fetched and edited data back into the store, and drops fetch
//! results once the visit's cancellation token fires.

use std::sync::Arc;

use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::domain::{DetailPatch, Record};
use crate::ports::CatalogClientPort;

use super::RecordStore;

/// Placeholder for values a record does not have yet.
pub const MISSING_VALUE: &str = "--";

/// State of one detail visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    /// Record exists; detail completeness not evaluated yet.
    Idle,
    /// Record was already detail-complete; no fetch issued.
    UsingCached(Record),
    /// Detail fetch in flight.
    Loading,
    /// Fetch succeeded and the merge was written back.
    Loaded(Record),
    /// Fetch failed; message kept for display.
    Failed(String),
    /// The id is not in the store. No fetch is attempted.
    NotFound,
    /// The visit ended while the fetch was in flight; result dropped.
    Cancelled,
}

impl DetailState {
    /// Short name for logs and error messages.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::UsingCached(_) => "using_cached",
            Self::Loading => "loading",
            Self::Loaded(_) => "loaded",
            Self::Failed(_) => "failed",
            Self::NotFound => "not_found",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Errors from detail controller operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DetailError {
    /// The visited id is not in the store.
    #[error("Pokemon not found: {id}")]
    NotFound { id: i64 },

    /// An edit was submitted before details were available.
    #[error("No details available for record {id} (state: {state})")]
    NoDetails { id: i64, state: &'static str },
}

/// Controller for a single detail visit.
pub struct DetailController {
    store: Arc<RecordStore>,
    client: Arc<dyn CatalogClientPort>,
    record_id: i64,
    state: DetailState,
    cancel: CancellationToken,
}

impl std::fmt::Debug for DetailController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetailController")
            .field("record_id", &self.record_id)
            .field("state", &self.state)
            .field("cancelled", &self.cancel.is_cancelled())
            .finish_non_exhaustive()
    }
}

impl DetailController {
    /// Start a visit. Enters `NotFound` directly when the id is unknown.
    pub fn open(
        store: Arc<RecordStore>,
        client: Arc<dyn CatalogClientPort>,
        record_id: i64,
    ) -> Self {
        let state = if store.get(record_id).is_some() {
            DetailState::Idle
        } else {
            debug!(record_id, "Detail visit for unknown record");
            DetailState::NotFound
        };
        Self {
            store,
            client,
            record_id,
            state,
            cancel: CancellationToken::new(),
        }
    }

    pub const fn record_id(&self) -> i64 {
        self.record_id
    }

    pub const fn state(&self) -> &DetailState {
        &self.state
    }

    /// The current in-memory detail object, if any.
    pub fn details(&self) -> Option<&Record> {
        match &self.state {
            DetailState::UsingCached(record) | DetailState::Loaded(record) => Some(record),
            _ => None,
        }
    }

    /// The failure message, if the fetch failed.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            DetailState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Token tied to this visit's lifetime.
    ///
    /// Cancelling it makes an in-flight [`load`](Self::load) drop its result.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// End the visit, cancelling any in-flight fetch.
    pub fn close(self) {
        self.cancel.cancel();
    }

    /// Drive the visit from `Idle` to a terminal state.
    ///
    /// Calling this in any other state returns the current state unchanged.
    pub async fn load(&mut self) -> &DetailState {
        if self.state != DetailState::Idle {
            return &self.state;
        }

        let Some(record) = self.store.get(self.record_id) else {
            self.state = DetailState::NotFound;
            return &self.state;
        };

        if record.is_detail_complete() {
            debug!(record_id = self.record_id, "Using cached details");
            self.state = DetailState::UsingCached(record);
            return &self.state;
        }

        self.state = DetailState::Loading;
        debug!(record_id = self.record_id, url = %record.url, "Fetching details");

        let result = tokio::select! {
            biased;
            () = self.cancel.cancelled() => None,
            result = self.client.fetch_record_details(&record.url) => Some(result),
        };

        self.state = match result {
            None => {
                warn!(record_id = self.record_id, "Detail visit ended, dropping fetch result");
                DetailState::Cancelled
            }
            Some(Ok(details)) => {
                let merged = record.with_details(&details);
                self.store.update(&merged);
                DetailState::Loaded(merged)
            }
            Some(Err(e)) => {
                warn!(record_id = self.record_id, reason = e.reason(), "Detail fetch failed");
                DetailState::Failed(e.to_string())
            }
        };
        &self.state
    }

    /// Merge a partial edit over the current details and write it back.
    pub fn apply_edit(&mut self, patch: &DetailPatch) -> Result<&Record, DetailError> {
        let current = match &mut self.state {
            DetailState::UsingCached(record) | DetailState::Loaded(record) => record,
            DetailState::NotFound => {
                return Err(DetailError::NotFound {
                    id: self.record_id,
                });
            }
            other => {
                return Err(DetailError::NoDetails {
                    id: self.record_id,
                    state: other.name(),
                });
            }
        };
        current.apply_patch(patch);
        self.store.update(current);
        Ok(&*current)
    }
}

impl Drop for DetailController {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Display-ready strings for a record's detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub id: i64,
    pub name: String,
    pub height: String,
    pub weight: String,
    pub types: String,
    pub abilities: String,
    pub sprite: Option<String>,
}

impl DetailView {
    pub fn from_record(record: &Record) -> Self {
        let joined = |names: Vec<&str>| {
            if names.is_empty() {
                MISSING_VALUE.to_string()
            } else {
                names.join(", ")
            }
        };
        Self {
            id: record.id,
            name: record.name.clone(),
            height: record
                .height
                .map_or_else(|| MISSING_VALUE.to_string(), |h| format!("{h} dm")),
            weight: record
                .weight
                .map_or_else(|| MISSING_VALUE.to_string(), |w| format!("{w} hg")),
            types: joined(record.type_names()),
            abilities: joined(record.ability_names()),
            sprite: record.sprite.clone(),
        }
    }
}
