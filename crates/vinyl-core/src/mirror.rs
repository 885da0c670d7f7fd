use crate::album::Album;
use tokio::sync::RwLock;

/// In-process ordered copy of the albums collection.
///
/// The mirror is seeded once at startup from a full scan of the
/// persistent store and mutated only after a corresponding store write
/// has succeeded. It is private to one process instance and diverges
/// from the store if other writers exist.
///
/// A single reader-writer lock guards the sequence: concurrent readers,
/// one writer, no torn reads. Relative order of entries is preserved
/// across deletions.
#[derive(Debug, Default)]
pub struct AlbumMirror {
    albums: RwLock<Vec<Album>>,
}

impl AlbumMirror {
    /// Creates an empty mirror.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mirror seeded with the store's contents, in store order.
    pub fn seeded(albums: Vec<Album>) -> Self {
        Self {
            albums: RwLock::new(albums),
        }
    }

    /// Returns a copy of the full sequence, in order.
    pub async fn snapshot(&self) -> Vec<Album> {
        self.albums.read().await.clone()
    }

    /// Linear scan for the first album whose identifier matches.
    pub async fn find_by_id(&self, id: &str) -> Option<Album> {
        self.albums
            .read()
            .await
            .iter()
            .find(|album| album.id == id)
            .cloned()
    }

    /// Appends an album to the end of the sequence.
    pub async fn push(&self, album: Album) {
        self.albums.write().await.push(album);
    }

    /// Removes the first album whose identifier matches, keeping the
    /// relative order of all other entries. Returns `true` if an entry
    /// was removed.
    pub async fn remove_by_id(&self, id: &str) -> bool {
        let mut albums = self.albums.write().await;
        match albums.iter().position(|album| album.id == id) {
            Some(index) => {
                albums.remove(index);
                true
            }
            None => false,
        }
    }

    /// Number of mirrored entries.
    pub async fn len(&self) -> usize {
        self.albums.read().await.len()
    }

    /// True when no entries are mirrored.
    pub async fn is_empty(&self) -> bool {
        self.albums.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn album(id: &str) -> Album {
        Album {
            id: id.to_string(),
            title: format!("title-{id}"),
            artist: format!("artist-{id}"),
            price: 9.99,
        }
    }

    #[tokio::test]
    async fn starts_empty() {
        let mirror = AlbumMirror::new();
        assert!(mirror.is_empty().await);
        assert_eq!(mirror.snapshot().await, vec![]);
    }

    #[tokio::test]
    async fn seeded_preserves_store_order() {
        let mirror = AlbumMirror::seeded(vec![album("b"), album("a"), album("c")]);

        let ids: Vec<String> = mirror.snapshot().await.into_iter().map(|a| a.id).collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }

    #[tokio::test]
    async fn push_appends_at_the_end() {
        let mirror = AlbumMirror::seeded(vec![album("1")]);
        mirror.push(album("2")).await;

        let ids: Vec<String> = mirror.snapshot().await.into_iter().map(|a| a.id).collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[tokio::test]
    async fn find_by_id_returns_first_match() {
        let mirror = AlbumMirror::seeded(vec![album("1"), album("2")]);

        let found = mirror.find_by_id("2").await.unwrap();
        assert_eq!(found.id, "2");
        assert!(mirror.find_by_id("nope").await.is_none());
    }

    #[tokio::test]
    async fn remove_first_entry_keeps_order() {
        let mirror = AlbumMirror::seeded(vec![album("1"), album("2"), album("3")]);

        assert!(mirror.remove_by_id("1").await);

        let ids: Vec<String> = mirror.snapshot().await.into_iter().map(|a| a.id).collect();
        assert_eq!(ids, ["2", "3"]);
    }

    #[tokio::test]
    async fn remove_interior_entry_keeps_order() {
        let mirror = AlbumMirror::seeded(vec![album("1"), album("2"), album("3")]);

        assert!(mirror.remove_by_id("2").await);

        let ids: Vec<String> = mirror.snapshot().await.into_iter().map(|a| a.id).collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[tokio::test]
    async fn remove_last_entry_keeps_order() {
        let mirror = AlbumMirror::seeded(vec![album("1"), album("2"), album("3")]);

        assert!(mirror.remove_by_id("3").await);

        let ids: Vec<String> = mirror.snapshot().await.into_iter().map(|a| a.id).collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[tokio::test]
    async fn remove_absent_entry_is_a_noop() {
        let mirror = AlbumMirror::seeded(vec![album("1")]);

        assert!(!mirror.remove_by_id("nope").await);
        assert_eq!(mirror.len().await, 1);
    }

    #[tokio::test]
    async fn remove_takes_only_the_first_duplicate() {
        // Uniqueness of ids is intended but never enforced.
        let mut second = album("1");
        second.title = "second".to_string();
        let mirror = AlbumMirror::seeded(vec![album("1"), second]);

        assert!(mirror.remove_by_id("1").await);

        let remaining = mirror.snapshot().await;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].title, "second");
    }

    #[tokio::test]
    async fn concurrent_access() {
        use std::sync::Arc;

        let mirror = Arc::new(AlbumMirror::new());
        let mut handles = vec![];

        for i in 0..10u64 {
            let mirror = Arc::clone(&mirror);
            handles.push(tokio::spawn(async move {
                mirror.push(album(&format!("id-{i:03}"))).await;
            }));
        }

        for i in 0..10u64 {
            let mirror = Arc::clone(&mirror);
            handles.push(tokio::spawn(async move {
                let _ = mirror.find_by_id(&format!("id-{i:03}")).await;
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(mirror.len().await, 10);
        for i in 0..10u64 {
            assert!(mirror.find_by_id(&format!("id-{i:03}")).await.is_some());
        }
    }
}
