//! Handler for the `serve` command.

use std::path::PathBuf;

use anyhow::Result;
use planetary_axum::{CorsConfig, ServerConfig, start_server};

use crate::bootstrap::CliConfig;

/// Start the HTTP server.
pub async fn execute(
    config: &CliConfig,
    port: u16,
    static_dir: Option<PathBuf>,
    api_only: bool,
) -> Result<()> {
    let mut server_config = ServerConfig {
        port,
        database_path: config.database_path.clone(),
        catalog_base_url: None,
        static_dir: None,
        cors: CorsConfig::AllowAll,
    };

    // Resolve static directory: api-only flag > explicit flag > default location > API-only
    if !api_only {
        if let Some(dir) = static_dir {
            server_config.static_dir = Some(dir);
        } else {
            let candidate = std::path::Path::new("static");
            if candidate.join("index.html").exists() {
                server_config.static_dir = Some(candidate.to_path_buf());
            }
        }
    }

    if let Some(ref dir) = server_config.static_dir {
        println!("Serving landing page from {}", dir.display());
    }
    println!("Listening on http://localhost:{port} ...");

    start_server(server_config).await
}
