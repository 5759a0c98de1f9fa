//! Handler for the `add` command.

use anyhow::Result;
use planetary_core::NewPlanet;

use crate::bootstrap::CliContext;

/// Create a planet record and report the outcome.
pub async fn execute(ctx: &CliContext, name: &str, climate: &str, terrain: &str) -> Result<()> {
    let created = ctx
        .planets
        .create(NewPlanet::new(name, climate, terrain))
        .await?;

    println!(
        "Created planet '{}' (id {}) with {} film appearance(s)",
        created.planet.name, created.planet.id, created.planet.appearance_count
    );
    if let Some(note) = created.catalog_note {
        println!("Note: film catalog was unavailable ({note}); stored neutral enrichment");
    }

    Ok(())
}
