//! Internal API response types for the film catalog.
//!
//! These types are internal to `planetary-swapi` and are not exposed to
//! consumers. External consumers use the port types from
//! `planetary-core`.

use serde::Deserialize;
use std::time::Duration;
use url::Url;

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal configuration for the SWAPI client.
#[derive(Debug, Clone)]
pub struct SwapiConfig {
    /// Base URL for the planets endpoint
    pub base_url: Url,
    /// User agent string for HTTP requests
    pub user_agent: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for SwapiConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse("https://swapi.dev/api/planets/")
                .expect("default SWAPI URL is valid"),
            user_agent: concat!("planetary-swapi/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

// ============================================================================
// Wire Types
// ============================================================================

/// One page of a planets search response.
///
/// The catalog paginates, but a name search is exact enough that only the
/// first page (and only its first element) is ever consulted.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    /// Matching planets, best match first.
    #[serde(default)]
    pub results: Vec<CatalogPlanet>,
}

/// The subset of a catalog planet entry that matters.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogPlanet {
    /// Planet name as the catalog spells it.
    pub name: String,
    /// Canonical reference URL for this entry.
    #[serde(default)]
    pub url: String,
    /// Films this planet appears in.
    #[serde(default)]
    pub films: Vec<String>,
}
