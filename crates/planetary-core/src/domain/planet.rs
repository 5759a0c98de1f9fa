//! Planet domain types.
//!
//! These types represent planet records in the system, independent of any
//! infrastructure concerns (database, HTTP, etc.).

use serde::{Deserialize, Serialize};

/// A planet record that exists in the system with a database ID.
///
/// This represents a persisted planet with all its metadata.
/// Use [`NewPlanet`] for planets that haven't been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    /// Database ID of the planet (always present for persisted records).
    pub id: i64,
    /// Normalized planet name, unique across all stored records.
    pub name: String,
    /// Free-text climate description.
    pub climate: String,
    /// Free-text terrain description.
    pub terrain: String,
    /// Number of film appearances reported by the external catalog at
    /// creation time. Never recomputed afterward.
    pub appearance_count: u32,
    /// Reference URL for the catalog's best match, empty when no match was
    /// found. Internal-only field: never exposed on the outbound API.
    #[serde(rename = "canonicalURL", default, skip_serializing)]
    pub canonical_url: String,
}

impl Planet {
    /// A record is structurally empty when its name is the zero value.
    ///
    /// Empty records can only arise from store inconsistency; callers
    /// filter them out of listings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

/// A planet to be inserted into the system (no ID yet).
///
/// Enrichment fields start at their neutral values and are attached by
/// `PlanetService::create` before the record reaches the store. After
/// insertion, the repository returns a [`Planet`] with the assigned ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlanet {
    /// Planet name as provided by the caller (normalized by the service).
    pub name: String,
    /// Free-text climate description.
    #[serde(default)]
    pub climate: String,
    /// Free-text terrain description.
    #[serde(default)]
    pub terrain: String,
    /// Film appearance count from the external catalog.
    #[serde(default)]
    pub appearance_count: u32,
    /// Catalog reference URL, empty when no match was found.
    #[serde(rename = "canonicalURL", default, skip_serializing)]
    pub canonical_url: String,
}

impl NewPlanet {
    /// Create a new planet with the caller-supplied fields.
    ///
    /// Enrichment fields are set to their neutral values.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        climate: impl Into<String>,
        terrain: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            climate: climate.into(),
            terrain: terrain.into(),
            appearance_count: 0,
            canonical_url: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_planet_starts_with_neutral_enrichment() {
        let planet = NewPlanet::new("Dagobah", "murky", "swamp");
        assert_eq!(planet.name, "Dagobah");
        assert_eq!(planet.appearance_count, 0);
        assert!(planet.canonical_url.is_empty());
    }

    #[test]
    fn test_planet_is_empty() {
        let planet = Planet {
            id: 1,
            name: String::new(),
            climate: String::new(),
            terrain: String::new(),
            appearance_count: 0,
            canonical_url: String::new(),
        };
        assert!(planet.is_empty());
    }

    #[test]
    fn test_canonical_url_is_not_serialized() {
        let planet = Planet {
            id: 7,
            name: "Hoth".to_string(),
            climate: "frozen".to_string(),
            terrain: "tundra".to_string(),
            appearance_count: 1,
            canonical_url: "https://swapi.dev/api/planets/4/".to_string(),
        };

        let json = serde_json::to_value(&planet).unwrap();
        assert_eq!(json["name"], "Hoth");
        assert_eq!(json["appearanceCount"], 1);
        assert!(json.get("canonicalURL").is_none());
    }
}
