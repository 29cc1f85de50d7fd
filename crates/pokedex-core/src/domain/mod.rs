//! Domain types for the catalog.
//!
//! These are pure data structures with no infrastructure concerns.

mod record;
pub mod synthetic;

pub use record::{DetailPatch, Record, RecordAbility, RecordDetails, RecordType};
pub use synthetic::{generate_record, new_record_id};
