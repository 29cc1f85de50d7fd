//! Store events broadcast to listeners.
//!
//! Every mutation of the record store emits one of these. Adapters decide
//! how to deliver them (log lines, UI refresh, channels).
//!
//! # Wire Format
//!
//! Events are serialized with a `type` tag:
//!
//! ```json
//! { "type": "record_removed", "id": 4 }
//! ```

use serde::{Deserialize, Serialize};

/// Which kind of collection load produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadKind {
    /// The seed load or an explicit `initialize` call.
    Initial,
    /// A `reload`, which empties the collection first.
    Reload,
}

/// Events emitted by the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreEvent {
    /// A collection load started.
    LoadStarted { kind: LoadKind, generation: u64 },

    /// A collection load replaced the collection.
    LoadCompleted {
        kind: LoadKind,
        generation: u64,
        count: usize,
    },

    /// A collection load failed.
    LoadFailed {
        kind: LoadKind,
        generation: u64,
        error: String,
    },

    /// A load resolved after a newer one started; its result was dropped.
    LoadSuperseded { kind: LoadKind, generation: u64 },

    /// A record was appended.
    RecordAdded { id: i64 },

    /// A record was merged with new field values.
    RecordUpdated { id: i64 },

    /// A record was removed.
    RecordRemoved { id: i64 },
}

impl StoreEvent {
    pub const fn record_added(id: i64) -> Self {
        Self::RecordAdded { id }
    }

    pub const fn record_updated(id: i64) -> Self {
        Self::RecordUpdated { id }
    }

    pub const fn record_removed(id: i64) -> Self {
        Self::RecordRemoved { id }
    }

    /// Short name for log output.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::LoadStarted { .. } => "load_started",
            Self::LoadCompleted { .. } => "load_completed",
            Self::LoadFailed { .. } => "load_failed",
            Self::LoadSuperseded { .. } => "load_superseded",
            Self::RecordAdded { .. } => "record_added",
            Self::RecordUpdated { .. } => "record_updated",
            Self::RecordRemoved { .. } => "record_removed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_wire_format() {
        let json = serde_json::to_value(StoreEvent::record_removed(4)).unwrap();
        assert_eq!(json, serde_json::json!({"type": "record_removed", "id": 4}));

        let json = serde_json::to_value(StoreEvent::LoadStarted {
            kind: LoadKind::Reload,
            generation: 2,
        })
        .unwrap();
        assert_eq!(json["type"], "load_started");
        assert_eq!(json["kind"], "reload");
    }

    #[test]
    fn test_event_names_match_tags() {
        let event = StoreEvent::LoadFailed {
            kind: LoadKind::Initial,
            generation: 1,
            error: "Failed to fetch pokemons".to_string(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], event.name());
    }
}
