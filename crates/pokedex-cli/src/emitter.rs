//! Store event emitter that writes events to the tracing log.

use pokedex_core::{StoreEvent, StoreEventEmitter};
use tracing::debug;

/// Logs every store event at debug level.
#[derive(Debug, Clone, Default)]
pub struct TracingEmitter;

impl TracingEmitter {
    pub const fn new() -> Self {
        Self
    }
}

impl StoreEventEmitter for TracingEmitter {
    fn emit(&self, event: StoreEvent) {
        debug!(event = event.name(), ?event, "Store event");
    }

    fn clone_box(&self) -> Box<dyn StoreEventEmitter> {
        Box::new(self.clone())
    }
}
