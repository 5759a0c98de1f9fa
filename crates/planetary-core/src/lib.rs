//! Core domain types and port definitions for the planetary record service.
//!
//! This crate holds everything that is independent of infrastructure:
//! the `Planet` domain model, the lookup-parameter codec, name
//! normalization, the repository and film-catalog ports, and the
//! `PlanetService` orchestrator. No sqlx, reqwest, or axum types appear
//! in any signature here.

#![deny(unsafe_code)]

pub mod domain;
pub mod name;
pub mod paths;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{NewPlanet, Planet, PlanetParam};
pub use name::normalize_name;
pub use ports::{
    CatalogAppearance, CatalogError, CoreError, FilmCatalog, PlanetRepository, RepositoryError,
};
pub use services::{CreatedPlanet, PlanetService};

// Re-export path utilities
pub use paths::{PathError, data_root, database_path};

// Silence unused dev-dependency warnings until we add runtime-based tests here
#[cfg(test)]
use tokio_test as _;
