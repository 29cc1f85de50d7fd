//! List command handler.
//!
//! Prints the session's records as a table, filtered by an optional search
//! term and sorted by name.

use anyhow::Result;

use super::ensure_loaded;
use crate::bootstrap::CliContext;
use crate::presentation::print_record_table;

/// Execute the list command.
///
/// # Errors
///
/// Fails with the store's error message when the seed load failed.
pub fn execute(ctx: &CliContext, search: Option<&str>) -> Result<()> {
    ensure_loaded(ctx)?;

    let mut view = ctx.pokedex().list_view();
    if let Some(term) = search {
        view.set_search(term);
    }
    let rows = view.rows();

    if rows.is_empty() {
        if view.search().is_empty() {
            println!("The catalog returned no records.");
        } else {
            println!("No records match '{}'.", view.search());
        }
        return Ok(());
    }

    print_record_table(&rows);
    println!("\n{} of {} record(s)", rows.len(), ctx.store().count());
    Ok(())
}
