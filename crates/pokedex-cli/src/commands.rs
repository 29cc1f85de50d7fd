//! Available subcommands.
//!
//! Every invocation starts a fresh session: the store is seeded from the
//! catalog, the command runs, and the session ends with the process.

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// List records sorted by name
    List {
        /// Only show records whose name contains this (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show the full details of one record
    Show {
        /// Record id (e.g. 25)
        id: i64,
    },

    /// Print how many records the catalog returned
    Count,

    /// Start an interactive session (search, edit, add, remove, reload)
    Shell,
}
