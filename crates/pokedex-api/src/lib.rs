//! `PokeAPI` adapter for the pokedex core.
//!
//! [`DefaultCatalogClient`] implements
//! [`CatalogClientPort`](pokedex_core::CatalogClientPort) over HTTP. Build it
//! from a [`CatalogClientConfig`] and hand it to the core as an
//! `Arc<dyn CatalogClientPort>`:
//!
//! ```no_run
//! use std::sync::Arc;
//! use pokedex_api::{CatalogClientConfig, DefaultCatalogClient};
//! use pokedex_core::CatalogClientPort;
//!
//! let client = DefaultCatalogClient::new(&CatalogClientConfig::new().with_page_size(50))?;
//! let client: Arc<dyn CatalogClientPort> = Arc::new(client);
//! # Ok::<(), pokedex_api::ApiError>(())
//! ```
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultCatalogClient is meant to be used through CatalogClientPort, not
// through its generic backend parameter
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod parsing;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultCatalogClient;

// Configuration
pub use config::{CatalogClientConfig, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};

// Errors
pub use error::{ApiError, ApiResult};

// Id extraction
pub use parsing::parse_record_id;

// Silence unused dev-dependency warnings
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use tokio_test as _;
