//! Event emitter trait for store notifications.
//!
//! Implementations handle transport details (log lines, channels, UI hooks).

use crate::events::StoreEvent;

/// Trait for emitting store events.
///
/// # Implementations
///
/// - `NoopEmitter` - For tests and contexts that don't need events
/// - Adapter-specific implementations (e.g. the CLI's tracing emitter)
pub trait StoreEventEmitter: Send + Sync {
    /// Emit a store event.
    ///
    /// Called while no store lock is held. This method should not block.
    fn emit(&self, event: StoreEvent);

    /// Clone this emitter into a boxed trait object.
    fn clone_box(&self) -> Box<dyn StoreEventEmitter>;
}

/// A no-op event emitter that discards all events.
#[derive(Debug, Clone, Default)]
pub struct NoopEmitter;

impl NoopEmitter {
    /// Create a new no-op emitter.
    pub const fn new() -> Self {
        Self
    }
}

impl StoreEventEmitter for NoopEmitter {
    fn emit(&self, _event: StoreEvent) {}

    fn clone_box(&self) -> Box<dyn StoreEventEmitter> {
        Box::new(self.clone())
    }
}
