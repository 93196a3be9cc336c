use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;

use super::env::{EnvSource, optional, string_or};

const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub migrations_path: String,
}

impl DatabaseSettings {
    /// Environment variables:
    /// - DATABASE_URL: PostgreSQL connection string (required)
    /// - DATABASE_MIGRATIONS_PATH: migrations directory
    pub fn from_source(source: EnvSource) -> anyhow::Result<Self> {
        let url = optional(source, "DATABASE_URL").context("DATABASE_URL must be set")?;

        Ok(Self {
            url,
            migrations_path: string_or(source, "DATABASE_MIGRATIONS_PATH", DEFAULT_MIGRATIONS_PATH),
        })
    }
}

/// Connects to PostgreSQL and applies pending migrations.
///
/// # Errors
/// Returns error if the database is unreachable or a migration fails.
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<PgPool> {
    let pool = create_postgres_pool(&DatabaseConfig::new(settings.url.clone()))
        .await
        .context("could not connect to the database")?;

    run_migrations(&pool, &settings.migrations_path)
        .await
        .with_context(|| format!("migrations in {} failed", settings.migrations_path))?;

    Ok(pool)
}
