mod cli;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tinylink_core::Shortener;
use tinylink_encoder::HashEncoder;
use tinylink_gateway::{telemetry, App, AppState};
use tinylink_shortener::{ResolverSettings, ShortenerService};
use tinylink_storage::{InMemoryRepository, MySqlRepository};
use tracing::{info, warn};

use crate::cli::{StorageBackendArg, CLI};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();

    telemetry::init(config.log_format)?;

    let encoder = HashEncoder::builder()
        .digest_seed(config.digest_seed)
        .build();

    info!(
        listen_addr = %config.listen_addr,
        public_base_url = %config.public_base_url,
        max_retries = config.max_retries,
        digest_seed = encoder.digest_seed(),
        storage_backend = %config.storage,
        "starting tinylink gateway"
    );
    let settings = ResolverSettings::builder()
        .max_retries(config.max_retries)
        .build();

    let shortener: Arc<dyn Shortener> = match config.storage {
        StorageBackendArg::InMemory => Arc::new(ShortenerService::new(
            InMemoryRepository::new(),
            encoder,
            settings,
        )),
        StorageBackendArg::Mysql => {
            let mysql_dsn = config
                .mysql_dsn
                .context("mysql dsn is required when storage backend is mysql")?;
            let repository = MySqlRepository::connect(&mysql_dsn).await?;
            repository.migrate().await?;
            Arc::new(ShortenerService::new(repository, encoder, settings))
        }
    };

    let app = App::router(AppState::new(shortener, config.public_base_url));

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
