//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Browse and edit the Pokémon catalog from the terminal.
///
/// Connection settings can also come from the environment (or a `.env`
/// file); flags win over both.
#[derive(Parser)]
#[command(name = "pokedex")]
#[command(about = "Browse the Pokémon catalog")]
#[command(version)]
pub struct Cli {
    /// Catalog list endpoint
    #[arg(long = "api-url", env = "POKEDEX_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Number of records fetched by a list call
    #[arg(long = "page-size", env = "POKEDEX_PAGE_SIZE", global = true)]
    pub page_size: Option<u32>,

    /// Per-request timeout in seconds
    #[arg(long = "timeout-secs", env = "POKEDEX_TIMEOUT_SECS", global = true)]
    pub timeout_secs: Option<u64>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
