use anyhow::{Context, Result};
use diesel::{Connection, PgConnection};
use diesel_async::pooled_connection::{deadpool::Pool, AsyncDieselConnectionManager};
use diesel_async::AsyncPgConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub fn build_pool(database_url: &str, max_size: usize) -> Result<Pool<AsyncPgConnection>> {
    let config = AsyncDieselConnectionManager::<AsyncPgConnection>::new(database_url);
    Pool::builder(config)
        .max_size(max_size)
        .build()
        .context("Failed to build connection pool")
}

/// Applies pending migrations over a blocking connection and returns how many ran.
pub fn run_migrations(database_url: &str) -> Result<usize> {
    let mut conn =
        PgConnection::establish(database_url).context("Failed to connect for migrations")?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|error| anyhow::anyhow!("Failed to run migrations: {error}"))?;

    for version in &applied {
        tracing::debug!(%version, "Applied migration");
    }
    Ok(applied.len())
}

/// Reverts every applied migration and returns how many were rolled back.
pub fn revert_migrations(database_url: &str) -> Result<usize> {
    let mut conn =
        PgConnection::establish(database_url).context("Failed to connect for migrations")?;
    let reverted = conn
        .revert_all_migrations(MIGRATIONS)
        .map_err(|error| anyhow::anyhow!("Failed to revert migrations: {error}"))?;

    for version in &reverted {
        tracing::debug!(%version, "Reverted migration");
    }
    Ok(reverted.len())
}
