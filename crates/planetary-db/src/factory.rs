//! Composition utilities for building the service with `SQLite` backends.
//!
//! This module provides factory functions for wiring up the application
//! with `SQLite` repositories. It is focused purely on construction and
//! should not contain any domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use planetary_core::{FilmCatalog, PlanetService};

use crate::repositories::SqlitePlanetRepository;

/// Factory for creating repository instances with `SQLite` backends.
///
/// This struct provides composition utilities only - no domain logic.
pub struct CoreFactory;

impl CoreFactory {
    /// Create a planet repository from a pool.
    pub fn planet_repository(pool: SqlitePool) -> Arc<SqlitePlanetRepository> {
        Arc::new(SqlitePlanetRepository::new(pool))
    }

    /// Build a fully composed `PlanetService` from a pool and catalog.
    ///
    /// This is the recommended single-step way for adapters to obtain
    /// the service.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let pool = setup_database(&db_path).await?;
    /// let catalog = Arc::new(DefaultSwapiClient::new(&SwapiClientConfig::default()));
    /// let service = CoreFactory::build_service(pool, catalog);
    /// ```
    pub fn build_service(pool: SqlitePool, catalog: Arc<dyn FilmCatalog>) -> PlanetService {
        PlanetService::new(Self::planet_repository(pool), catalog)
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the production schema
/// already applied, ensuring test parity.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Get the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create a planet repository using this test database.
    pub fn planet_repository(&self) -> SqlitePlanetRepository {
        SqlitePlanetRepository::new(self.pool.clone())
    }

    /// Build a `PlanetService` over this test database.
    pub fn service(&self, catalog: Arc<dyn FilmCatalog>) -> PlanetService {
        CoreFactory::build_service(self.pool.clone(), catalog)
    }
}
