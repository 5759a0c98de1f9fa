//! Planet repository trait definition.
//!
//! This port defines the interface for planet persistence operations.
//! Implementations must handle all storage details internally, including
//! the mapping from [`PlanetParam`] variants to storage-native queries.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewPlanet, Planet, PlanetParam};

/// Repository for planet persistence operations.
///
/// Name uniqueness is the implementation's responsibility and must be
/// enforced atomically by the store itself (a uniqueness constraint on
/// the name field, scoped to non-empty values), never by a
/// read-then-write check here or in callers.
#[async_trait]
pub trait PlanetRepository: Send + Sync {
    /// Insert a new planet.
    ///
    /// Returns the persisted planet with its assigned ID. Returns
    /// `Err(RepositoryError::AlreadyExists)` when the store's uniqueness
    /// constraint rejects the name.
    async fn insert(&self, planet: &NewPlanet) -> Result<Planet, RepositoryError>;

    /// Exact-match lookup by id or name.
    ///
    /// Returns `Ok(None)` when nothing matches; absence is not an error.
    async fn find_one(&self, param: &PlanetParam) -> Result<Option<Planet>, RepositoryError>;

    /// List every non-empty planet currently stored.
    ///
    /// Produces an empty vector (never an absent value) when the store is
    /// empty.
    async fn list(&self) -> Result<Vec<Planet>, RepositoryError>;

    /// Delete at most one planet matching exactly.
    ///
    /// Returns the number of deleted rows; 0 means nothing matched and is
    /// not an error.
    async fn delete_one(&self, param: &PlanetParam) -> Result<u64, RepositoryError>;
}
