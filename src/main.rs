//! Order service binary
//!
//! Usage: `order-service [config.yaml]`. Without an argument the path is read
//! from `ORDER_SERVICE_CONFIG`; without either, defaults apply.

use anyhow::{Context, Result};
use orders::prelude::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const CONFIG_PATH_ENV: &str = "ORDER_SERVICE_CONFIG";

#[tokio::main]
async fn main() -> Result<()> {
    let config = load_config()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.filter))
        .context("Invalid logging filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(
        backend = ?config.storage.backend,
        bind_address = %config.server.bind_address,
        "Starting order service"
    );

    let repository = build_repository(&config).await?;

    ServerBuilder::new()
        .with_shared_repository(repository)
        .serve(&config.server.bind_address)
        .await
}

fn load_config() -> Result<ServiceConfig> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(CONFIG_PATH_ENV).ok());

    let mut config = match path {
        Some(path) => ServiceConfig::from_yaml_file(&path)
            .with_context(|| format!("Failed to load configuration from {}", path))?,
        None => ServiceConfig::default(),
    };

    config.apply_env_overrides()?;
    config.validate()?;
    Ok(config)
}

async fn build_repository(config: &ServiceConfig) -> Result<Arc<dyn OrderRepository>> {
    match config.storage.backend {
        StorageBackend::InMemory => Ok(Arc::new(InMemoryOrderRepository::new())),
        #[cfg(feature = "postgres")]
        StorageBackend::Postgres => {
            use orders::storage::postgres::{connect, ensure_schema};

            let url = config
                .storage
                .database_url
                .as_deref()
                .context("storage.database_url is required for the postgres backend")?;
            let pool = connect(url, config.storage.max_connections).await?;
            ensure_schema(&pool).await?;
            Ok(Arc::new(PostgresOrderRepository::new(pool)))
        }
        #[cfg(not(feature = "postgres"))]
        StorageBackend::Postgres => {
            anyhow::bail!("The postgres backend requires building with the `postgres` feature")
        }
    }
}
