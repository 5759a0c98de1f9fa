//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the web adapter. All concrete implementations are instantiated
//! here.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use planetary_core::{FilmCatalog, PlanetService, paths::database_path};
use planetary_db::{CoreFactory, setup_database};
use planetary_swapi::{DefaultSwapiClient, SwapiClientConfig};

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Path to the `SQLite` database file.
    pub database_path: PathBuf,
    /// Base URL for the external film catalog.
    pub catalog_base_url: Option<String>,
    /// Optional path to static assets (landing page) to serve.
    pub static_dir: Option<PathBuf>,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Create config with default paths.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self {
            port: 8080,
            database_path: database_path()?,
            catalog_base_url: None,
            static_dir: None,
            cors: CorsConfig::default(),
        })
    }

    /// Set the static directory for landing-page serving.
    #[must_use]
    pub fn with_static_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(path.into());
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }
}

/// Application context for the Axum adapter.
///
/// Holds the composed service for the web server. Tests construct this
/// directly over an in-memory database and a stub catalog.
pub struct AxumContext {
    /// The planet record service.
    pub planets: Arc<PlanetService>,
}

/// Bootstrap the Axum server with all services.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    tracing::info!(
        target: "planetary.paths",
        database_path = %config.database_path.display(),
        "Axum bootstrap resolved paths"
    );

    // 1. Create database pool with full schema setup
    let pool = setup_database(&config.database_path).await?;

    // 2. Create the film-catalog client
    let mut catalog_config = SwapiClientConfig::new();
    if let Some(ref base_url) = config.catalog_base_url {
        catalog_config = catalog_config.with_base_url(base_url.clone());
    }
    let catalog: Arc<dyn FilmCatalog> = Arc::new(DefaultSwapiClient::new(&catalog_config));

    // 3. Assemble the service
    let planets = Arc::new(CoreFactory::build_service(pool, catalog));

    Ok(AxumContext { planets })
}

/// Start the web server on the configured port.
///
/// If `config.static_dir` is set, serves the landing page and static
/// assets as a fallback. Otherwise, serves only the API endpoints.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config).await?;

    let app = if let Some(ref static_dir) = config.static_dir {
        info!("Serving static assets from: {}", static_dir.display());
        crate::routes::create_spa_router(ctx, static_dir, &config.cors)
    } else {
        crate::routes::create_router(ctx, &config.cors)
    };

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("planetary web server listening on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
