//! Port trait implementation for `SwapiClient`.
//!
//! This module implements the core-owned `FilmCatalog` trait for
//! `SwapiClient`, handling the conversion between internal wire types and
//! the core port types.

use async_trait::async_trait;
use planetary_core::{CatalogAppearance, CatalogError, FilmCatalog};

use crate::client::SwapiClient;
use crate::error::SwapiError;
use crate::http::HttpBackend;

/// Convert an internal `SwapiError` to the core `CatalogError`.
fn map_error(err: SwapiError) -> CatalogError {
    match err {
        SwapiError::RequestFailed { status, url } => CatalogError::RequestFailed { status, url },
        SwapiError::Network(e) => CatalogError::Network {
            message: e.to_string(),
        },
        SwapiError::InvalidUrl(e) => CatalogError::InvalidResponse {
            message: e.to_string(),
        },
        SwapiError::JsonParse(e) => CatalogError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

#[async_trait]
impl<B: HttpBackend> FilmCatalog for SwapiClient<B> {
    async fn appearances(&self, name: &str) -> Result<CatalogAppearance, CatalogError> {
        let best_match = self.search_planet(name).await.map_err(map_error)?;

        // No match is a valid, neutral outcome - not an error.
        Ok(best_match.map_or_else(CatalogAppearance::default, |planet| CatalogAppearance {
            film_count: planet.films.len() as u32,
            canonical_url: planet.url,
        }))
    }
}
