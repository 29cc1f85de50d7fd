//! Command handlers.
//!
//! Each handler takes the composed [`CliContext`] and works through its
//! `Pokedex` facade.

pub mod count;
pub mod list;
pub mod shell;
pub mod show;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Fail when the session's seed load failed.
pub(crate) fn ensure_loaded(ctx: &CliContext) -> Result<(), CliError> {
    match ctx.store().error() {
        Some(message) => Err(CliError::Catalog(message)),
        None => Ok(()),
    }
}
