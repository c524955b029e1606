use chrono::{DateTime, Utc};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::track::{catalog, TrackId};
use crate::domain::user::UserId;

/// Identifier of a playlist, assigned from its own sequence
pub type PlaylistId = i64;

/// Playlist entity
///
/// # Invariants
/// - Every id in `tracks` exists in the track catalog
/// - `owner_id` referenced an existing user when the playlist was created
/// - Only the owner may replace the track list
#[derive(Debug, Clone)]
pub struct Playlist {
    id: PlaylistId,
    owner_id: UserId,
    name: String,
    description: Option<String>,
    tracks: Vec<TrackId>,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl Playlist {
    /// Creates a new playlist with its initial track list
    ///
    /// # Returns
    /// * `Err(DomainError::UnknownTrack)` - If an initial track is not in the catalog
    pub fn new(
        id: PlaylistId,
        owner_id: UserId,
        name: String,
        description: Option<String>,
        tracks: Vec<TrackId>,
    ) -> DomainResult<Self> {
        if let Some(unknown) = catalog::first_unknown(&tracks) {
            return Err(DomainError::UnknownTrack(unknown));
        }

        Ok(Self {
            id,
            owner_id,
            name,
            description,
            tracks,
            created_at: Utc::now(),
            updated_at: None,
        })
    }

    /// Replaces the track list on behalf of `requesting_user_id`
    ///
    /// The ownership check runs first, then every id is checked against the
    /// catalog. Nothing is written unless both pass. On success the list is
    /// stored verbatim, duplicates and order included.
    ///
    /// # Returns
    /// * `Err(DomainError::NotPlaylistOwner)` - If the caller is not the owner
    /// * `Err(DomainError::UnknownTrack)` - Naming the first id missing from the catalog
    pub fn replace_tracks(
        &mut self,
        requesting_user_id: UserId,
        track_ids: Vec<TrackId>,
    ) -> DomainResult<()> {
        if !self.is_owned_by(requesting_user_id) {
            return Err(DomainError::NotPlaylistOwner {
                playlist_id: self.id,
                user_id: requesting_user_id,
            });
        }

        if let Some(unknown) = catalog::first_unknown(&track_ids) {
            return Err(DomainError::UnknownTrack(unknown));
        }

        self.tracks = track_ids;
        self.updated_at = Some(Utc::now());

        Ok(())
    }

    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }

    // ===== Getters =====

    pub fn id(&self) -> PlaylistId {
        self.id
    }

    pub fn owner_id(&self) -> UserId {
        self.owner_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn tracks(&self) -> &[TrackId] {
        &self.tracks
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}
