//! CLI-specific error types and exit codes.

use pokedex_api::ApiError;
use pokedex_core::{CatalogPortError, DetailError};
use rustyline::error::ReadlineError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Catalog request failed; carries the user-facing message.
    #[error("{0}")]
    Catalog(String),

    /// No record with this id in the session.
    #[error("Pokemon not found: {0}")]
    NotFound(i64),

    /// Argument or input error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (terminal closed, stdin unreadable, ...).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to an exit code.
    ///
    /// Exit codes follow sysexits.h where one fits.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Catalog(_) => 69,     // EX_UNAVAILABLE
            Self::NotFound(_) => 1,
            Self::Arguments(_) => 2,    // EX_USAGE
            Self::Io(_) => 74,          // EX_IOERR
            Self::Config(_) => 78,      // EX_CONFIG
        }
    }
}

impl From<CatalogPortError> for CliError {
    fn from(err: CatalogPortError) -> Self {
        Self::Catalog(err.to_string())
    }
}

impl From<DetailError> for CliError {
    fn from(err: DetailError) -> Self {
        match err {
            DetailError::NotFound { id } => Self::NotFound(id),
            other @ DetailError::NoDetails { .. } => Self::Arguments(other.to_string()),
        }
    }
}

impl From<ApiError> for CliError {
    fn from(err: ApiError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<ReadlineError> for CliError {
    fn from(err: ReadlineError) -> Self {
        Self::Io(err.to_string())
    }
}
