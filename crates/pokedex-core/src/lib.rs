//! Core domain types, ports and session services for the pokedex client.
//!
//! This crate owns the record model, the [`CatalogClientPort`] trait that
//! adapters implement, and the in-memory [`RecordStore`] with the list and
//! detail controllers built on top of it.
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod events;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{DetailPatch, Record, RecordAbility, RecordDetails, RecordType};
pub use events::{LoadKind, StoreEvent};
pub use ports::{
    CatalogClientPort, CatalogPortError, CatalogPortResult, NoopEmitter, StoreEventEmitter,
};
pub use services::{
    DetailController, DetailError, DetailState, DetailView, EditForm, LoadOutcome,
    MISSING_VALUE, Pokedex, RecordListView, RecordStore, StoreStatus, filter_and_sort,
};

// Silence unused dev-dependency warnings; mockall is used by integration tests
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use tokio_test as _;
