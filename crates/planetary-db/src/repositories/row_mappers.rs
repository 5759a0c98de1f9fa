//! Row mapping helpers for `SQLite` queries.

use planetary_core::{Planet, RepositoryError};
use sqlx::Row;

/// Shared SELECT column list for planet queries.
pub const PLANET_SELECT_COLUMNS: &str =
    "id, name, climate, terrain, appearance_count, canonical_url";

/// Parse a database row into a Planet.
pub fn row_to_planet(row: &sqlx::sqlite::SqliteRow) -> Result<Planet, RepositoryError> {
    let appearance_count: i64 = row
        .try_get("appearance_count")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

    Ok(Planet {
        id: row
            .try_get("id")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        name: row
            .try_get("name")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        climate: row
            .try_get("climate")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        terrain: row
            .try_get("terrain")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        appearance_count: u32::try_from(appearance_count).unwrap_or(0),
        canonical_url: row
            .try_get("canonical_url")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
    })
}
