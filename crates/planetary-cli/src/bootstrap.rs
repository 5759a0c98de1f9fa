//! CLI context bootstrap - wires infrastructure for command handlers.
//!
//! This mirrors the Axum bootstrap: database pool, catalog client, and
//! the composed `PlanetService`, built once per invocation.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use planetary_core::{FilmCatalog, PlanetService, paths::database_path};
use planetary_db::{CoreFactory, setup_database};
use planetary_swapi::{DefaultSwapiClient, SwapiClientConfig};

/// Configuration for a CLI invocation.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Path to the `SQLite` database file.
    pub database_path: PathBuf,
}

impl CliConfig {
    /// Resolve configuration, preferring an explicit `--db` override.
    pub fn with_defaults(db_override: Option<PathBuf>) -> Result<Self> {
        let database_path = match db_override {
            Some(path) => path,
            None => database_path()?,
        };
        Ok(Self { database_path })
    }
}

/// Dependencies available to command handlers.
pub struct CliContext {
    /// The planet record service.
    pub planets: Arc<PlanetService>,
}

/// Build the CLI context (composition root for management commands).
pub async fn bootstrap(config: &CliConfig) -> Result<CliContext> {
    tracing::debug!(
        database_path = %config.database_path.display(),
        "CLI bootstrap resolved paths"
    );

    let pool = setup_database(&config.database_path).await?;
    let catalog: Arc<dyn FilmCatalog> = Arc::new(DefaultSwapiClient::new(&SwapiClientConfig::new()));
    let planets = Arc::new(CoreFactory::build_service(pool, catalog));

    Ok(CliContext { planets })
}
