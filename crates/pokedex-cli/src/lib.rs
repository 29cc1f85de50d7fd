//! Command-line adapter for the pokedex core.
//!
//! `main.rs` parses arguments, builds a [`CliContext`] through
//! [`bootstrap`], and dispatches to one of the [`handlers`].
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings
#[cfg(test)]
use async_trait as _;
#[cfg(test)]
use tokio_test as _;

// Used by main.rs only
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod emitter;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod utils;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use emitter::TracingEmitter;
pub use error::CliError;
pub use parser::Cli;
