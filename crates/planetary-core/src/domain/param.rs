//! Lookup-parameter codec.
//!
//! Callers identify a planet by exactly one of two dimensions: the
//! store-assigned surrogate id or the natural-key name. The variant is
//! decided once, at the adapter boundary, so the service and repository
//! never re-check which dimension was meant.

use crate::ports::CoreError;

/// The identifying parameter for a lookup or delete operation.
///
/// Constructed via [`PlanetParam::parse`] from the two recognized
/// parameter names, `"id"` and `"name"`. The storage mapping (which
/// column each variant queries) lives in the repository implementation,
/// keeping callers store-agnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanetParam {
    /// Lookup by the store-assigned surrogate identifier.
    Id(i64),
    /// Lookup by planet name.
    Name(String),
}

impl PlanetParam {
    /// Decode a parameter name and raw value into a lookup key.
    ///
    /// Returns `CoreError::InvalidParameter` for unrecognized parameter
    /// names and `CoreError::InvalidIdentifier` when an `"id"` value does
    /// not decode to the store's native identifier representation.
    pub fn parse(param_name: &str, raw_value: &str) -> Result<Self, CoreError> {
        match param_name {
            "id" => raw_value.parse::<i64>().map(Self::Id).map_err(|_| {
                CoreError::InvalidIdentifier(format!("'{raw_value}' is not a valid planet id"))
            }),
            "name" => Ok(Self::Name(raw_value.to_string())),
            other => Err(CoreError::InvalidParameter(format!(
                "unknown lookup parameter '{other}', expected 'id' or 'name'"
            ))),
        }
    }
}
