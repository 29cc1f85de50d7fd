//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where the HTTP adapter and the core are
//! wired together for the CLI. Command handlers receive the composed
//! [`CliContext`] and work through its `Pokedex` facade.

use std::sync::Arc;
use std::time::Duration;

use pokedex_api::{CatalogClientConfig, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE, DefaultCatalogClient};
use pokedex_core::{CatalogClientPort, Pokedex, RecordStore, StoreEventEmitter};
use tracing::info;

use crate::emitter::TracingEmitter;
use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Catalog list endpoint.
    pub api_url: String,
    /// Records requested by the list call.
    pub page_size: u32,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout: Duration::from_secs(30),
        }
    }
}

impl CliConfig {
    /// Resolve config from parsed arguments (which already folded in the
    /// environment), falling back to defaults.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let defaults = Self::default();
        let config = Self {
            api_url: cli.api_url.clone().unwrap_or(defaults.api_url),
            page_size: cli.page_size.unwrap_or(defaults.page_size),
            timeout: cli
                .timeout_secs
                .map_or(defaults.timeout, Duration::from_secs),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), CliError> {
        if self.page_size == 0 {
            return Err(CliError::Config(
                "page size must be at least 1".to_string(),
            ));
        }
        if self.api_url.trim().is_empty() {
            return Err(CliError::Config("api url must not be empty".to_string()));
        }
        Ok(())
    }

    /// The adapter configuration for these settings.
    pub fn client_config(&self) -> CatalogClientConfig {
        CatalogClientConfig::new()
            .with_base_url(self.api_url.clone())
            .with_page_size(self.page_size)
            .with_timeout(self.timeout)
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The core application facade.
    pub pokedex: Pokedex,
}

impl CliContext {
    /// Access the facade.
    pub const fn pokedex(&self) -> &Pokedex {
        &self.pokedex
    }

    /// Access the session's record store.
    pub fn store(&self) -> &Arc<RecordStore> {
        self.pokedex.store()
    }
}

/// Bootstrap the CLI application.
///
/// Builds the HTTP client, then opens the session, which runs the seed
/// load. A failed seed load does not fail bootstrap: it is left in the
/// store status for handlers to report.
pub async fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    let client: Arc<dyn CatalogClientPort> =
        Arc::new(DefaultCatalogClient::new(&config.client_config())?);
    info!(url = %config.api_url, page_size = config.page_size, "Opening session");

    Ok(bootstrap_with(client, Arc::new(TracingEmitter::new())).await)
}

/// Bootstrap with an injected client and emitter (for testing).
pub async fn bootstrap_with(
    client: Arc<dyn CatalogClientPort>,
    emitter: Arc<dyn StoreEventEmitter>,
) -> CliContext {
    CliContext {
        pokedex: Pokedex::open(client, emitter).await,
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Canned catalog client for handler tests.

    use async_trait::async_trait;
    use pokedex_core::{
        CatalogClientPort, CatalogPortError, CatalogPortResult, NoopEmitter, Record,
        RecordAbility, RecordDetails, RecordType,
    };
    use std::sync::Arc;

    use super::{CliContext, bootstrap_with};

    pub struct StaticCatalog {
        pub list: CatalogPortResult<Vec<Record>>,
    }

    #[async_trait]
    impl CatalogClientPort for StaticCatalog {
        async fn list_records(&self) -> CatalogPortResult<Vec<Record>> {
            self.list.clone()
        }

        async fn fetch_record_details(&self, url: &str) -> CatalogPortResult<RecordDetails> {
            if url.ends_with("/1/") {
                Ok(RecordDetails {
                    id: 1,
                    name: "bulbasaur".to_string(),
                    height: 7,
                    weight: 69,
                    types: vec![RecordType::new("grass"), RecordType::new("poison")],
                    abilities: vec![RecordAbility::new("overgrow", false)],
                    sprite: None,
                })
            } else {
                Err(CatalogPortError::DetailFailed {
                    url: url.to_string(),
                    reason: "status 404".to_string(),
                })
            }
        }
    }

    pub fn starters() -> Vec<Record> {
        vec![
            Record::summary(4, "charmander", "https://pokeapi.co/api/v2/pokemon/4/"),
            Record::summary(1, "bulbasaur", "https://pokeapi.co/api/v2/pokemon/1/"),
            Record::summary(7, "squirtle", "https://pokeapi.co/api/v2/pokemon/7/"),
        ]
    }

    pub async fn context(list: CatalogPortResult<Vec<Record>>) -> CliContext {
        bootstrap_with(
            Arc::new(StaticCatalog { list }),
            Arc::new(NoopEmitter::new()),
        )
        .await
    }
}
