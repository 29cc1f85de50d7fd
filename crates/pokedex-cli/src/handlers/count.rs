//! Count command handler.

use anyhow::Result;

use super::ensure_loaded;
use crate::bootstrap::CliContext;

/// Print the number of records in the session.
pub fn execute(ctx: &CliContext) -> Result<()> {
    ensure_loaded(ctx)?;
    println!("{}", ctx.store().count());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::testing::{context, starters};

    #[tokio::test]
    async fn test_count_succeeds_after_seed_load() {
        let ctx = context(Ok(starters())).await;
        assert!(execute(&ctx).is_ok());
    }
}
