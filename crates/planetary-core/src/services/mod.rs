//! Core services orchestrating domain operations.

mod planet_service;

pub use planet_service::{CreatedPlanet, PlanetService};
