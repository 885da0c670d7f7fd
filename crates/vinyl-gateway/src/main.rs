use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use vinyl_gateway::cli::{StorageBackendArg, CLI};
use vinyl_gateway::config::AppConfig;
use vinyl_gateway::{App, AppState};
use vinyl_storage::{InMemoryAlbumStore, MongoAlbumRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = CLI::try_parse()?;

    info!(
        listen_addr = %config.listen_addr,
        storage_backend = %config.storage,
        "starting gateway server"
    );

    match config.storage {
        StorageBackendArg::Mongodb => {
            let app_config = AppConfig::load(&config.config_path)?;
            let repository = MongoAlbumRepository::connect(&app_config.uri).await?;
            let state = AppState::initialize(Arc::new(repository.clone())).await?;

            serve(config.listen_addr, state).await?;
            repository.shutdown().await;
        }
        StorageBackendArg::InMemory => {
            let state = AppState::initialize(Arc::new(InMemoryAlbumStore::new())).await?;
            serve(config.listen_addr, state).await?;
        }
    }

    Ok(())
}

async fn serve(listen_addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "gateway listening");

    axum::serve(listener, App::router(state)).await
}
