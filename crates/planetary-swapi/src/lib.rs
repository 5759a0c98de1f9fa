//! SWAPI-shaped film-catalog client for the planetary service.
//!
//! Implements the `FilmCatalog` port from `planetary-core` against the
//! public Star Wars API. The client issues exactly one bounded search
//! request per lookup; failure handling (graceful degradation) is the
//! caller's concern, not this crate's.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// Allow private types in the public client alias - DefaultSwapiClient is meant
// to be used through the FilmCatalog trait, not its internal generic structure
#![allow(private_interfaces, private_bounds)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::{DefaultSwapiClient, SwapiClient};

// Configuration
pub use config::SwapiClientConfig;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
