use crate::album::Album;
use crate::error::Result;
use async_trait::async_trait;

/// The persistent-store contract for album records.
///
/// The store is authoritative for catalog contents; callers that keep
/// derived state (the mirror) must only update it after the
/// corresponding store operation has succeeded.
#[async_trait]
pub trait AlbumRepository: Send + Sync + 'static {
    /// Returns every album in the collection, in stored order.
    ///
    /// Used once at startup to seed the mirror. No pagination.
    async fn list_all(&self) -> Result<Vec<Album>>;

    /// Inserts one album document. Duplicate identifiers are not rejected.
    async fn insert(&self, album: &Album) -> Result<()>;

    /// Deletes at most one document whose identifier matches.
    /// Returns `true` if a document existed and was removed.
    async fn delete_by_id(&self, id: &str) -> Result<bool>;
}
