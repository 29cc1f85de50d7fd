//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core expects from infrastructure.
//! They contain no implementation details and use only domain types.

pub mod catalog;
pub mod event_emitter;

pub use catalog::{CatalogClientPort, CatalogPortError, CatalogPortResult};
pub use event_emitter::{NoopEmitter, StoreEventEmitter};
