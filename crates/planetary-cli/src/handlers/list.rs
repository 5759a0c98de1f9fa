//! Handler for the `list` command.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Print every stored planet as pretty JSON.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let planets = ctx.planets.list().await?;

    if planets.is_empty() {
        println!("No planets stored yet. Add one with: planetary add <name>");
        return Ok(());
    }

    println!("{}", serde_json::to_string_pretty(&planets)?);
    Ok(())
}
