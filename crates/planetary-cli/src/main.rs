//! CLI entry point - the composition root.
//!
//! Command dispatch routes to handlers which delegate to the
//! `PlanetService`. All infrastructure wiring happens in `bootstrap`.

use clap::Parser;

use planetary_cli::{Cli, CliConfig, Commands, bootstrap, handlers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    let config = CliConfig::with_defaults(cli.db)?;

    let Some(command) = cli.command else {
        // No command provided - show help
        use clap::CommandFactory;
        planetary_cli::Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Serve {
            port,
            static_dir,
            api_only,
        } => {
            handlers::serve::execute(&config, port, static_dir, api_only).await?;
        }
        Commands::Add {
            name,
            climate,
            terrain,
        } => {
            let ctx = bootstrap(&config).await?;
            handlers::add::execute(&ctx, &name, &climate, &terrain).await?;
        }
        Commands::List => {
            let ctx = bootstrap(&config).await?;
            handlers::list::execute(&ctx).await?;
        }
        Commands::Get { identifier } => {
            let ctx = bootstrap(&config).await?;
            handlers::get::execute(&ctx, &identifier).await?;
        }
        Commands::Remove { identifier } => {
            let ctx = bootstrap(&config).await?;
            handlers::remove::execute(&ctx, &identifier).await?;
        }
    }

    Ok(())
}
