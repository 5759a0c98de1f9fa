//! Planet service - orchestrates record operations.
//!
//! Composes the repository and film-catalog ports to implement create,
//! list, lookup, and delete. Each call is a single-shot transaction; the
//! service holds no cache and no cross-call state, so concurrent calls
//! against the shared store are safe. The only concurrency-sensitive
//! invariant (name uniqueness) is delegated to the store's atomic
//! constraint.

use std::sync::Arc;

use crate::domain::{NewPlanet, Planet, PlanetParam};
use crate::name::normalize_name;
use crate::ports::{CatalogAppearance, CoreError, FilmCatalog, PlanetRepository};

/// Outcome of a successful creation.
///
/// `catalog_note` is populated when the enrichment call degraded: the
/// record was still created, with neutral enrichment values, and the note
/// carries the catalog failure so callers can observe the degradation
/// without mistaking it for an error.
#[derive(Debug, Clone)]
pub struct CreatedPlanet {
    /// The persisted planet, with its assigned ID.
    pub planet: Planet,
    /// Diagnostic note when the catalog lookup failed.
    pub catalog_note: Option<String>,
}

/// Service for planet record operations.
///
/// Dependencies are injected at construction time; each instance owns its
/// own handles, which keeps test doubles and concurrent test isolation
/// straightforward.
pub struct PlanetService {
    repo: Arc<dyn PlanetRepository>,
    catalog: Arc<dyn FilmCatalog>,
}

impl PlanetService {
    /// Create a new planet service with the given ports.
    pub fn new(repo: Arc<dyn PlanetRepository>, catalog: Arc<dyn FilmCatalog>) -> Self {
        Self { repo, catalog }
    }

    /// Create a new planet record.
    ///
    /// Normalizes the name, enriches the record from the film catalog,
    /// and inserts it. Catalog failures degrade to neutral enrichment;
    /// a duplicate normalized name surfaces as
    /// `CoreError::Repository(RepositoryError::AlreadyExists)`.
    ///
    /// Exactly one outbound catalog call and at most one store write per
    /// invocation; neither happens when validation fails.
    pub async fn create(&self, planet: NewPlanet) -> Result<CreatedPlanet, CoreError> {
        let name = normalize_name(&planet.name)?;

        let (appearance, catalog_note) = match self.catalog.appearances(&name).await {
            Ok(found) => (found, None),
            Err(e) => {
                tracing::warn!(
                    planet = %name,
                    error = %e,
                    "film catalog lookup failed, storing neutral enrichment"
                );
                (CatalogAppearance::default(), Some(e.to_string()))
            }
        };

        let enriched = NewPlanet {
            name,
            appearance_count: appearance.film_count,
            canonical_url: appearance.canonical_url,
            ..planet
        };

        let planet = self.repo.insert(&enriched).await?;
        Ok(CreatedPlanet {
            planet,
            catalog_note,
        })
    }

    /// List all stored planets.
    ///
    /// Structurally empty records (blank name) are dropped as a guard
    /// against store inconsistency.
    pub async fn list(&self) -> Result<Vec<Planet>, CoreError> {
        let planets = self.repo.list().await?;
        Ok(planets.into_iter().filter(|p| !p.is_empty()).collect())
    }

    /// Look up a single planet by id or name.
    ///
    /// Returns `Ok(None)` when nothing matches; callers distinguish
    /// "absent" from "error" explicitly.
    pub async fn find_by_param(&self, param: PlanetParam) -> Result<Option<Planet>, CoreError> {
        let param = Self::prepare(param)?;
        Ok(self.repo.find_one(&param).await?)
    }

    /// Delete a single planet by id or name.
    ///
    /// Returns `Ok(false)` when nothing matched; repeated deletes of the
    /// same key are not an error.
    pub async fn delete_by_param(&self, param: PlanetParam) -> Result<bool, CoreError> {
        let param = Self::prepare(param)?;
        let deleted = self.repo.delete_one(&param).await?;
        Ok(deleted > 0)
    }

    /// Name lookups go through the same normalization as creation, so the
    /// natural key is matched case-insensitively for well-formed input.
    fn prepare(param: PlanetParam) -> Result<PlanetParam, CoreError> {
        match param {
            PlanetParam::Name(raw) => Ok(PlanetParam::Name(normalize_name(&raw)?)),
            id @ PlanetParam::Id(_) => Ok(id),
        }
    }
}
