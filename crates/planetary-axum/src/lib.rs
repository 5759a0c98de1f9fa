//! Axum web adapter for the planetary record service.
//!
//! Exposes the `PlanetService` operations over HTTP, mirroring the
//! original planets API surface: list, create, lookup and delete by id or
//! name, plus an optional static landing page.

#![deny(unsafe_code)]

pub mod bootstrap;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{AxumContext, CorsConfig, ServerConfig, bootstrap, start_server};
pub use error::HttpError;
pub use routes::{create_router, create_spa_router};
pub use state::AppState;
