//! Shared CLI presentation utilities.
//!
//! Format-only: views come from the core (`DetailView`, `filter_and_sort`)
//! and are printed here.

pub mod record_display;
pub mod tables;

pub use record_display::{display_record_details, print_record_table};
pub use tables::{format_optional, print_separator, truncate_string};
