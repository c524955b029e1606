use thiserror::Error;

use crate::domain::playlist::PlaylistId;
use crate::domain::track::TrackId;
use crate::domain::user::UserId;

/// Rule violations raised by the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Playlist not found: {0}")]
    PlaylistNotFound(PlaylistId),

    #[error("No fields to update")]
    EmptyUpdate,

    #[error("User {user_id} is not allowed to modify playlist {playlist_id}")]
    NotPlaylistOwner {
        playlist_id: PlaylistId,
        user_id: UserId,
    },

    #[error("Invalid track id: {0}")]
    UnknownTrack(TrackId),
}

pub type DomainResult<T> = Result<T, DomainError>;
