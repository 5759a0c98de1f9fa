//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;
use std::path::PathBuf;

use crate::commands::Commands;

/// Command-line interface definition for the planet record service.
///
/// This is the top-level parser that handles global options and
/// dispatches to subcommands.
#[derive(Parser)]
#[command(name = "planetary")]
#[command(about = "Planet records with film-catalog enrichment")]
#[command(version)]
pub struct Cli {
    /// Override the database file for this invocation
    #[arg(long = "db", global = true, env = "PLANETARY_DB")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from(["planetary", "--db", "/tmp/test.db", "list"]);
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/test.db")));
        assert!(matches!(cli.command, Some(Commands::List)));
    }
}
