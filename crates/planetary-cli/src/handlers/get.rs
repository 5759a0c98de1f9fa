//! Handler for the `get` command.

use anyhow::Result;

use super::resolve;
use crate::bootstrap::CliContext;

/// Show a single planet by id or name.
pub async fn execute(ctx: &CliContext, identifier: &str) -> Result<()> {
    match resolve(ctx, identifier).await? {
        Some(planet) => println!("{}", serde_json::to_string_pretty(&planet)?),
        None => println!("No planet found for '{identifier}'"),
    }
    Ok(())
}
