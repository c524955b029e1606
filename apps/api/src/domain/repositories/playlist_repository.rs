use async_trait::async_trait;

use crate::domain::playlist::{Playlist, PlaylistId};
use crate::domain::user::UserId;

/// Repository trait for playlists
///
/// Playlist ids come from a sequence independent of user ids.
#[async_trait]
pub trait PlaylistRepository: Send + Sync {
    /// Reserve the next playlist id
    async fn next_id(&self) -> Result<PlaylistId, String>;

    /// Save a playlist (insert or replace)
    async fn save(&self, playlist: &Playlist) -> Result<(), String>;

    /// Find a playlist by ID
    async fn find_by_id(&self, id: PlaylistId) -> Result<Option<Playlist>, String>;

    /// List every stored playlist
    async fn find_all(&self) -> Result<Vec<Playlist>, String>;

    /// Delete a playlist by ID, returning false if there was none
    async fn delete(&self, id: PlaylistId) -> Result<bool, String>;

    /// Delete every playlist owned by a user, returning how many were removed
    async fn delete_by_owner(&self, owner_id: UserId) -> Result<usize, String>;
}
