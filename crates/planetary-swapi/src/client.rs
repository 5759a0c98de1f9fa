//! Film-catalog client for planet searches.

use crate::config::SwapiClientConfig;
use crate::error::SwapiResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::{CatalogPlanet, SwapiConfig};
use crate::url::build_search_url;
use url::Url;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default catalog client using the reqwest HTTP backend.
pub type DefaultSwapiClient = SwapiClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the film-catalog planets endpoint.
///
/// This client is generic over an HTTP backend, allowing for easy
/// testing. Use `DefaultSwapiClient` for production code; external code
/// interacts with it through the `FilmCatalog` port.
pub struct SwapiClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: SwapiConfig,
}

impl DefaultSwapiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &SwapiClientConfig) -> Self {
        let internal_config = Self::to_internal_config(config);
        let backend = ReqwestBackend::new(&internal_config);
        Self {
            backend,
            config: internal_config,
        }
    }

    fn to_internal_config(config: &SwapiClientConfig) -> SwapiConfig {
        SwapiConfig {
            base_url: Url::parse(&config.base_url).unwrap_or_else(|_| {
                Url::parse("https://swapi.dev/api/planets/").expect("default URL is valid")
            }),
            user_agent: config.user_agent.clone(),
            timeout: config.timeout,
        }
    }
}

impl<B: HttpBackend> SwapiClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: SwapiConfig, backend: B) -> Self {
        Self { backend, config }
    }

    /// Search the catalog for a planet by name.
    ///
    /// Issues a single request and returns the first match, if any. The
    /// catalog's search already ranks the best match first, so trailing
    /// results are never consulted.
    pub(crate) async fn search_planet(&self, name: &str) -> SwapiResult<Option<CatalogPlanet>> {
        let url = build_search_url(&self.config, name);
        let response: crate::models::SearchResponse = self.backend.get_json(&url).await?;
        Ok(response.results.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::FakeBackend;
    use serde_json::json;

    pub(crate) fn test_config() -> SwapiConfig {
        SwapiConfig::default()
    }

    #[test]
    fn test_default_client_creation() {
        let config = SwapiClientConfig::new();
        let _client = DefaultSwapiClient::new(&config);
    }

    #[test]
    fn test_invalid_base_url_falls_back_to_default() {
        let config = SwapiClientConfig::new().with_base_url("not a url");
        let client = DefaultSwapiClient::new(&config);
        assert_eq!(
            client.config.base_url.as_str(),
            "https://swapi.dev/api/planets/"
        );
    }

    #[tokio::test]
    async fn test_search_planet_takes_first_result() {
        let backend = FakeBackend::new().with_response(
            "search=Tatooine",
            json!({
                "results": [
                    {
                        "name": "Tatooine",
                        "url": "https://swapi.dev/api/planets/1/",
                        "films": ["a", "b", "c", "d", "e"]
                    },
                    {
                        "name": "Tatooine II",
                        "url": "https://swapi.dev/api/planets/99/",
                        "films": []
                    }
                ]
            }),
        );

        let client = SwapiClient::with_backend(test_config(), backend);
        let planet = client.search_planet("Tatooine").await.unwrap().unwrap();

        assert_eq!(planet.name, "Tatooine");
        assert_eq!(planet.url, "https://swapi.dev/api/planets/1/");
        assert_eq!(planet.films.len(), 5);
    }

    #[tokio::test]
    async fn test_search_planet_no_match_is_none() {
        let backend = FakeBackend::new().with_response("search=Arrakis", json!({"results": []}));

        let client = SwapiClient::with_backend(test_config(), backend);
        let planet = client.search_planet("Arrakis").await.unwrap();

        assert!(planet.is_none());
    }
}
