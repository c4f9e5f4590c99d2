use anyhow::{Context, Result};
use entity_gateway::adapters::postgres::connection::{build_pool, run_migrations};
use entity_gateway::config::Config;
use entity_gateway::services::items::ItemsService;
use entity_gateway::UnitOfWorkFactory;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,entity_gateway=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(pool_max_size = config.pool_max_size, "Configuration loaded");

    let database_url = config.database_url.clone();
    let applied = tokio::task::spawn_blocking(move || run_migrations(&database_url))
        .await
        .context("Migration task panicked")??;
    tracing::info!(applied, "Migrations complete");

    let pool = build_pool(&config.database_url, config.pool_max_size)?;
    let items_service = ItemsService::new(UnitOfWorkFactory::new(pool));

    let stored = items_service
        .count_items()
        .await
        .context("Failed to reach the items table")?;
    tracing::info!(stored, "Items gateway ready");

    Ok(())
}
