//! Subcommand definitions.

use clap::Subcommand;
use std::path::PathBuf;

/// All planetary subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = 8080)]
        port: u16,

        /// Directory with the landing page and static assets
        #[arg(long)]
        static_dir: Option<PathBuf>,

        /// Serve API endpoints only, without static assets
        #[arg(long)]
        api_only: bool,
    },

    /// Create a planet record
    Add {
        /// Planet name (normalized before storage)
        name: String,

        /// Climate description
        #[arg(long, default_value = "")]
        climate: String,

        /// Terrain description
        #[arg(long, default_value = "")]
        terrain: String,
    },

    /// List all planet records
    List,

    /// Show a single planet by id or name
    Get {
        /// Planet id or name
        identifier: String,
    },

    /// Delete a planet by id or name
    Remove {
        /// Planet id or name
        identifier: String,
    },
}
