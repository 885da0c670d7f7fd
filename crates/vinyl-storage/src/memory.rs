use async_trait::async_trait;
use tokio::sync::RwLock;
use vinyl_core::repository::AlbumRepository;
use vinyl_core::{Album, Result};

/// In-memory implementation of the repository contract.
///
/// Backs the `in-memory` storage backend and the gateway tests. The
/// sequence is an ordered `Vec` under a reader-writer lock so that
/// `list_all` returns a stable order for mirror seeding.
#[derive(Debug, Default)]
pub struct InMemoryAlbumStore {
    albums: RwLock<Vec<Album>>,
}

impl InMemoryAlbumStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given albums, in order.
    pub fn with_albums(albums: Vec<Album>) -> Self {
        Self {
            albums: RwLock::new(albums),
        }
    }
}

#[async_trait]
impl AlbumRepository for InMemoryAlbumStore {
    async fn list_all(&self) -> Result<Vec<Album>> {
        Ok(self.albums.read().await.clone())
    }

    async fn insert(&self, album: &Album) -> Result<()> {
        self.albums.write().await.push(album.clone());
        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool> {
        let mut albums = self.albums.write().await;
        match albums.iter().position(|album| album.id == id) {
            Some(index) => {
                albums.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
