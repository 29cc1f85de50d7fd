//! Show command handler.

use anyhow::Result;
use pokedex_core::{DetailController, DetailState, DetailView};

use super::ensure_loaded;
use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::display_record_details;

/// Open a detail visit for `id` and drive it to a terminal state.
///
/// Succeeds only when the visit ends with details available.
pub(crate) async fn open_loaded(ctx: &CliContext, id: i64) -> Result<DetailController, CliError> {
    let mut visit = ctx.pokedex().open_detail(id);
    let failure = match visit.load().await {
        DetailState::UsingCached(_) | DetailState::Loaded(_) => None,
        DetailState::NotFound => Some(CliError::NotFound(id)),
        DetailState::Failed(message) => Some(CliError::Catalog(message.clone())),
        other => Some(CliError::Catalog(format!(
            "Detail visit ended in state {}",
            other.name()
        ))),
    };
    failure.map_or(Ok(visit), Err)
}

/// Execute the show command.
pub async fn execute(ctx: &CliContext, id: i64) -> Result<()> {
    ensure_loaded(ctx)?;
    let visit = open_loaded(ctx, id).await?;
    if let Some(record) = visit.details() {
        display_record_details(&DetailView::from_record(record));
    }
    Ok(())
}
