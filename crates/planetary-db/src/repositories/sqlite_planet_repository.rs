//! `SQLite` implementation of the `PlanetRepository` trait.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use planetary_core::{NewPlanet, Planet, PlanetParam, PlanetRepository, RepositoryError};

use super::row_mappers::{PLANET_SELECT_COLUMNS, row_to_planet};

/// `SQLite` implementation of the `PlanetRepository` trait.
///
/// Holds a connection pool and maps each [`PlanetParam`] variant onto its
/// storage column, so callers stay agnostic of the store's identifier
/// representation.
pub struct SqlitePlanetRepository {
    pool: SqlitePool,
}

impl SqlitePlanetRepository {
    /// Create a new `SQLite` planet repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Map an insert failure onto the domain taxonomy.
///
/// The partial unique index on `name` rejects duplicates; everything else
/// is a storage fault.
fn map_insert_error(e: &sqlx::Error, name: &str) -> RepositoryError {
    if e.as_database_error()
        .is_some_and(sqlx::error::DatabaseError::is_unique_violation)
    {
        RepositoryError::AlreadyExists(format!("planet '{name}' already exists"))
    } else {
        RepositoryError::Storage(e.to_string())
    }
}

#[async_trait]
impl PlanetRepository for SqlitePlanetRepository {
    async fn insert(&self, planet: &NewPlanet) -> Result<Planet, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO planets (name, climate, terrain, appearance_count, canonical_url, created_at) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&planet.name)
        .bind(&planet.climate)
        .bind(&planet.terrain)
        .bind(i64::from(planet.appearance_count))
        .bind(&planet.canonical_url)
        .bind(Utc::now().to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| map_insert_error(&e, &planet.name))?;

        let id = result.last_insert_rowid();

        let row = sqlx::query(&format!(
            "SELECT {PLANET_SELECT_COLUMNS} FROM planets WHERE id = ?"
        ))
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        row_to_planet(&row)
    }

    async fn find_one(&self, param: &PlanetParam) -> Result<Option<Planet>, RepositoryError> {
        let row = match param {
            PlanetParam::Id(id) => {
                sqlx::query(&format!(
                    "SELECT {PLANET_SELECT_COLUMNS} FROM planets WHERE id = ?"
                ))
                .bind(*id)
                .fetch_optional(&self.pool)
                .await
            }
            PlanetParam::Name(name) => {
                sqlx::query(&format!(
                    "SELECT {PLANET_SELECT_COLUMNS} FROM planets WHERE name = ?"
                ))
                .bind(name.as_str())
                .fetch_optional(&self.pool)
                .await
            }
        }
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        row.as_ref().map(row_to_planet).transpose()
    }

    async fn list(&self) -> Result<Vec<Planet>, RepositoryError> {
        let rows = sqlx::query(&format!(
            "SELECT {PLANET_SELECT_COLUMNS} FROM planets WHERE name <> '' ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        rows.iter().map(row_to_planet).collect()
    }

    async fn delete_one(&self, param: &PlanetParam) -> Result<u64, RepositoryError> {
        let result = match param {
            PlanetParam::Id(id) => {
                sqlx::query("DELETE FROM planets WHERE id = ?")
                    .bind(*id)
                    .execute(&self.pool)
                    .await
            }
            PlanetParam::Name(name) => {
                sqlx::query("DELETE FROM planets WHERE name = ?")
                    .bind(name.as_str())
                    .execute(&self.pool)
                    .await
            }
        }
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        Ok(result.rows_affected())
    }
}
