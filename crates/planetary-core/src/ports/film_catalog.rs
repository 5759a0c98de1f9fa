//! Film catalog port definition.
//!
//! The external catalog is consulted exactly once per creation to count
//! film appearances for the new planet. Its failure domain is isolated:
//! the service degrades catalog errors to neutral enrichment instead of
//! failing the creation.

use async_trait::async_trait;
use thiserror::Error;

/// Enrichment data for a planet, as reported by the external catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogAppearance {
    /// Number of films the best-matching catalog entry appears in.
    /// 0 when the catalog has no match for the name.
    pub film_count: u32,
    /// Reference URL of the best-matching entry, empty when no match.
    pub canonical_url: String,
}

/// Errors from the external film catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog responded with a non-success HTTP status.
    #[error("catalog request failed with status {status}: {url}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// Network-level failure (connect, timeout, TLS).
    #[error("catalog network error: {message}")]
    Network {
        /// Description of the failure
        message: String,
    },

    /// The catalog returned a response the client could not decode.
    #[error("invalid response from film catalog: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },
}

/// Client for the external film catalog.
///
/// Implementations issue a single bounded search request per call; retry
/// policy is deliberately out of scope.
#[async_trait]
pub trait FilmCatalog: Send + Sync {
    /// Look up the appearance data for a planet name.
    ///
    /// A name the catalog does not know yields `Ok` with the neutral
    /// [`CatalogAppearance`]; `Err` is reserved for transport and decode
    /// failures.
    async fn appearances(&self, name: &str) -> Result<CatalogAppearance, CatalogError>;
}
