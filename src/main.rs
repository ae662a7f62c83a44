use anyhow::Result;
use clap::{Parser, Subcommand};
use pantrychef::routes::{self, AppState};
use pantrychef_engine::{known_cuisines, known_ingredients};
use std::sync::Arc;

/// pantrychef - recipe discovery from the ingredients you already have
#[derive(Parser)]
#[command(name = "pantrychef")]
#[command(about = "Ingredient-driven recipe matching and ranking service", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Load and validate the recipe data file, then report what it holds
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = pantrychef::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    pantrychef::observability::init_observability(&config.observability.log_level)?;

    match cli.command {
        Commands::Serve { host, port } => serve_command(config, host, port).await,
        Commands::Check => check_command(config),
    }
}

#[tracing::instrument(skip(config))]
async fn serve_command(
    config: pantrychef::config::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting pantrychef server...");

    // Use CLI overrides if provided, otherwise use config
    let host = host_override.unwrap_or(config.server.host);
    let port = port_override.unwrap_or(config.server.port);

    // The collection is loaded once and never written afterwards.
    let recipes = pantrychef::catalog::load_recipes(&config.data.recipes_path)?;

    let state = AppState {
        recipes: Arc::new(recipes),
    };
    let app = routes::router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

#[tracing::instrument(skip(config))]
fn check_command(config: pantrychef::config::Config) -> Result<()> {
    let recipes = pantrychef::catalog::load_recipes(&config.data.recipes_path)?;

    let ingredients = known_ingredients(&recipes);
    let cuisines = known_cuisines(&recipes);
    let untimed = recipes.iter().filter(|r| r.time.is_none()).count();

    tracing::info!(
        recipes = recipes.len(),
        ingredients = ingredients.len(),
        cuisines = cuisines.len(),
        untimed,
        "Recipe data file is valid"
    );
    println!(
        "{} recipes, {} known ingredients, {} cuisines ({} recipes without a time)",
        recipes.len(),
        ingredients.len(),
        cuisines.len(),
        untimed
    );

    Ok(())
}
