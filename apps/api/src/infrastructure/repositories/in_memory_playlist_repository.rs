use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::playlist::{Playlist, PlaylistId};
use crate::domain::repositories::PlaylistRepository;
use crate::domain::user::UserId;

/// In-memory implementation of PlaylistRepository
///
/// Listing returns playlists in ascending id order.
pub struct InMemoryPlaylistRepository {
    playlists: RwLock<BTreeMap<PlaylistId, Playlist>>,
    next_id: AtomicI64,
}

impl InMemoryPlaylistRepository {
    /// Creates an empty repository whose first id is 1
    pub fn new() -> Self {
        Self {
            playlists: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryPlaylistRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlaylistRepository for InMemoryPlaylistRepository {
    async fn next_id(&self) -> Result<PlaylistId, String> {
        Ok(self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    async fn save(&self, playlist: &Playlist) -> Result<(), String> {
        self.playlists
            .write()
            .await
            .insert(playlist.id(), playlist.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: PlaylistId) -> Result<Option<Playlist>, String> {
        Ok(self.playlists.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Playlist>, String> {
        Ok(self.playlists.read().await.values().cloned().collect())
    }

    async fn delete(&self, id: PlaylistId) -> Result<bool, String> {
        Ok(self.playlists.write().await.remove(&id).is_some())
    }

    async fn delete_by_owner(&self, owner_id: UserId) -> Result<usize, String> {
        let mut playlists = self.playlists.write().await;
        let before = playlists.len();
        playlists.retain(|_, playlist| !playlist.is_owned_by(owner_id));
        Ok(before - playlists.len())
    }
}
