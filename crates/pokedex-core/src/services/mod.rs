//! Core services - the session's business logic layer.
//!
//! Services here orchestrate between ports (trait interfaces) and domain
//! logic. They don't know about concrete implementations.

mod edit_form;
mod pokedex;
mod record_detail;
mod record_list;
mod record_store;

#[cfg(test)]
pub(crate) mod testing;

pub use edit_form::{EditForm, parse_leading_u32, split_names};
pub use pokedex::Pokedex;
pub use record_detail::{DetailController, DetailError, DetailState, DetailView, MISSING_VALUE};
pub use record_list::{RecordListView, filter_and_sort};
pub use record_store::{LoadOutcome, RecordStore, StoreStatus};
