//! Wire types for the HTTP API.
//!
//! Request and response bodies live here so the domain types never leak
//! adapter concerns. `ApiPlanet` is the outbound planet shape: it omits
//! the internal-only `canonical_url` field entirely.

use planetary_core::{NewPlanet, Planet};
use serde::{Deserialize, Serialize};

/// Request body for creating a planet.
///
/// Enrichment fields are not accepted from callers; the service computes
/// them.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlanetRequest {
    /// Raw planet name; normalized by the service.
    pub name: String,
    /// Free-text climate description.
    #[serde(default)]
    pub climate: String,
    /// Free-text terrain description.
    #[serde(default)]
    pub terrain: String,
}

impl CreatePlanetRequest {
    /// Convert into the domain insert type with neutral enrichment.
    pub fn into_new_planet(self) -> NewPlanet {
        NewPlanet::new(self.name, self.climate, self.terrain)
    }
}

/// Response body for a successful creation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResponse {
    /// Always true on the success path; failures use the error body.
    pub created: bool,
    /// Store-assigned id of the new record.
    pub id: i64,
    /// Present when the catalog lookup degraded; the record was still
    /// created, with neutral enrichment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_note: Option<String>,
}

/// Response body for delete operations.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    /// Whether a record was actually removed.
    pub deleted: bool,
}

/// Outbound planet representation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPlanet {
    pub id: i64,
    pub name: String,
    pub climate: String,
    pub terrain: String,
    pub appearance_count: u32,
}

impl From<Planet> for ApiPlanet {
    fn from(planet: Planet) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            climate: planet.climate,
            terrain: planet.terrain,
            appearance_count: planet.appearance_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_planet_omits_canonical_url() {
        let planet = Planet {
            id: 1,
            name: "Hoth".to_string(),
            climate: "frozen".to_string(),
            terrain: "tundra".to_string(),
            appearance_count: 1,
            canonical_url: "https://swapi.dev/api/planets/4/".to_string(),
        };

        let json = serde_json::to_value(ApiPlanet::from(planet)).unwrap();
        assert_eq!(json["appearanceCount"], 1);
        assert!(json.get("canonicalURL").is_none());
        assert!(json.get("canonicalUrl").is_none());
    }

    #[test]
    fn test_create_request_defaults_optional_fields() {
        let req: CreatePlanetRequest = serde_json::from_str(r#"{"name": "Endor"}"#).unwrap();
        let planet = req.into_new_planet();
        assert_eq!(planet.name, "Endor");
        assert!(planet.climate.is_empty());
        assert!(planet.terrain.is_empty());
        assert_eq!(planet.appearance_count, 0);
    }
}
