//! Handler for the `remove` command.

use anyhow::Result;
use planetary_core::PlanetParam;

use super::resolve;
use crate::bootstrap::CliContext;

/// Delete a planet by id or name.
pub async fn execute(ctx: &CliContext, identifier: &str) -> Result<()> {
    // Resolve first so removal by either dimension targets one record.
    let Some(planet) = resolve(ctx, identifier).await? else {
        println!("No planet found for '{identifier}'");
        return Ok(());
    };

    let deleted = ctx
        .planets
        .delete_by_param(PlanetParam::Id(planet.id))
        .await?;

    if deleted {
        println!("Removed planet '{}' (id {})", planet.name, planet.id);
    } else {
        println!("Planet '{}' was already removed", planet.name);
    }

    Ok(())
}
