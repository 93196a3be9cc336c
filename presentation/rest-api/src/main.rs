use dotenvy::dotenv;
use tracing::info;

mod api;
mod config;
mod setup;

use config::logging_config::LoggingConfig;
use config::{app_config::AppConfig, database_config, env};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Startup is all-or-nothing: configuration, database and migrations must all
/// succeed before the listener binds.
/// - config/: environment-driven settings (server, logging, CORS, rate limit, Firebase, Haut.ai, database)
/// - setup/: dependency injection and server setup
/// - api/: route handlers, DTOs, auth and middleware
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load .env before anything reads the environment
    let dotenv_loaded = dotenv().is_ok();

    // 2. Initialize tracing (RUST_LOG wins over LOG_LEVEL)
    LoggingConfig::from_source(&env::process_env).init_tracing();
    if dotenv_loaded {
        info!("Loaded environment from .env");
    }

    // 3. Load configuration
    let config = AppConfig::from_env()?;
    info!(
        "Starting {} v{} ({})",
        config.info.name, config.info.version, config.info.environment
    );

    // 4. Initialize database and run migrations
    let pool = database_config::init_database(&config.database).await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(&config, pool)?;

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
