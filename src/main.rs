//! Bookshelf GraphQL server
//!
//! Usage: `bookshelf [CONFIG_PATH]`. Without an argument the path is read
//! from `BOOKSHELF_CONFIG`; without either, built-in defaults are used.

use anyhow::{Context, Result};
use bookshelf::prelude::*;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "bookshelf=info,tower_http=info";
const CONFIG_ENV: &str = "BOOKSHELF_CONFIG";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = load_config()?;

    tracing::info!(
        addr = %config.listen_addr(),
        seed = config.store.seed,
        playground = config.graphql.playground,
        "bookshelf starting"
    );

    ServerBuilder::new().with_config(config).serve().await
}

fn load_config() -> Result<BookshelfConfig> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(CONFIG_ENV).ok());

    match path {
        Some(path) => {
            tracing::info!(path = %path, "loading configuration");
            BookshelfConfig::from_yaml_file(&path)
                .with_context(|| format!("failed to load configuration from {}", path))
        }
        None => Ok(BookshelfConfig::default()),
    }
}
