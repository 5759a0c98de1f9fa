//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the core domain expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` or `reqwest` types in any signature
//! - Repository methods are CRUD-only; dispatch logic lives in the service
//! - Not-found is a valid outcome (`Ok(None)` / count 0), never an error

pub mod film_catalog;
pub mod planet_repository;

use thiserror::Error;

pub use film_catalog::{CatalogAppearance, CatalogError, FilmCatalog};
pub use planet_repository::PlanetRepository;

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g.
/// sqlx errors) and provides a clean interface for the service to handle
/// storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A record with the same unique name already exists.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Storage backend error (connectivity, timeout, malformed row).
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Core error type for semantic domain errors.
///
/// This is the canonical error type used across the core domain.
/// Adapters map this to their own error types (HTTP status codes, CLI
/// exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Identifying input failed validation (empty/blank name).
    #[error("Validation error: {0}")]
    Validation(String),

    /// The lookup dimension was not one of the recognized parameters.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The lookup key was syntactically invalid for the target store.
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),
}
