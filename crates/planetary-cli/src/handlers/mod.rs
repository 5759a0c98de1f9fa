//! Command handlers.
//!
//! Each handler takes the `CliContext` (or config, for `serve`) and the
//! command's arguments, delegates to the service, and prints the result.

pub mod add;
pub mod get;
pub mod list;
pub mod remove;
pub mod serve;

use anyhow::Result;
use planetary_core::{Planet, PlanetParam};

use crate::bootstrap::CliContext;

/// Resolve a planet by a single identifier, trying id first, then name.
pub(crate) async fn resolve(ctx: &CliContext, identifier: &str) -> Result<Option<Planet>> {
    if let Ok(id) = identifier.parse::<i64>() {
        if let Some(planet) = ctx.planets.find_by_param(PlanetParam::Id(id)).await? {
            return Ok(Some(planet));
        }
    }
    Ok(ctx
        .planets
        .find_by_param(PlanetParam::Name(identifier.to_string()))
        .await?)
}
