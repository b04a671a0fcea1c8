mod cli;

use std::sync::Arc;

use crate::cli::{StorageBackendArg, CLI};
use clap::Parser;
use idsmoe_core::KeyValueStore;
use idsmoe_gateway::{App, AppState, Settings};
use idsmoe_storage::{InMemoryStore, RedisStore};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CLI::parse();
    idsmoe_telemetry::init(config.log_format.into())?;

    info!(
        listen_addr = %config.listen_addr,
        storage_backend = %config.storage,
        "starting gateway server"
    );

    let store: Arc<dyn KeyValueStore> = match config.storage {
        StorageBackendArg::Redis => Arc::new(RedisStore::connect(&config.redis_url).await?),
        StorageBackendArg::InMemory => {
            warn!("in-memory store starts empty; every lookup will miss");
            Arc::new(InMemoryStore::new())
        }
    };

    let settings = Settings::builder()
        .dataset_base_url(config.dataset_base_url)
        .homepage_url(config.homepage_url)
        .build();
    let app = App::router(AppState::new(store, settings));

    let listener = TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "gateway listening");

    axum::serve(listener, app).await?;

    Ok(())
}
