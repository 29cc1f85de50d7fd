//! Remote catalog port definitions.
//!
//! This module defines the port trait and errors for the remote catalog.
//! The HTTP implementation lives in `pokedex-api`.

mod client;
mod error;

pub use client::CatalogClientPort;
pub use error::{CatalogPortError, CatalogPortResult};
