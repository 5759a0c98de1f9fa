//! URL construction helpers for the film-catalog API.
//!
//! Pure functions for building search URLs, ensuring consistent
//! construction across all API calls.

use crate::models::SwapiConfig;
use url::Url;

/// Build a planets search URL for the given name.
pub fn build_search_url(config: &SwapiConfig, name: &str) -> Url {
    let mut url = config.base_url.clone();
    url.set_query(Some(&format!("search={}", urlencoding::encode(name))));
    url
}
