use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::prelude::*;

use transactd::cli::{Cli, Commands};
use transactd::config::Config;
use transactd::services::{ResponseCache, TransactionService};
use transactd::store::InMemoryTransactionStore;
use transactd::{AppState, create_app};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Some(Commands::Config) = cli.command {
        println!("server_port   = {}", config.server_port);
        println!("cache_enabled = {}", config.cache_enabled);
        return Ok(());
    }

    let store = Arc::new(InMemoryTransactionStore::new());
    let cache = config
        .cache_enabled
        .then(|| Arc::new(ResponseCache::new()));
    if cache.is_some() {
        tracing::info!("read-through transaction cache enabled");
    }
    let service = TransactionService::new(store, cache);

    let app = create_app(AppState { service });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    tracing::info!("listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
