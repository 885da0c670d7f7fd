use std::sync::Arc;

use tracing::info;
use vinyl_core::{AlbumMirror, AlbumRepository, Result};

/// Shared per-process state handed to every handler.
///
/// Constructed once at startup and injected through axum's `State`
/// extractor; there are no ambient globals.
#[derive(Clone)]
pub struct AppState {
    repository: Arc<dyn AlbumRepository>,
    mirror: Arc<AlbumMirror>,
}

impl AppState {
    /// Seeds the mirror with a full scan of the store and wires both
    /// into the shared state. Fails when the scan does, which is
    /// startup-fatal for the caller.
    pub async fn initialize(repository: Arc<dyn AlbumRepository>) -> Result<Self> {
        let albums = repository.list_all().await?;
        for album in &albums {
            info!(
                title = %album.title,
                artist = %album.artist,
                price = album.price,
                "mirrored album"
            );
        }

        Ok(Self {
            repository,
            mirror: Arc::new(AlbumMirror::seeded(albums)),
        })
    }

    pub fn repository(&self) -> &Arc<dyn AlbumRepository> {
        &self.repository
    }

    pub fn mirror(&self) -> &AlbumMirror {
        &self.mirror
    }
}
