use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::extractors::{ApiJson, ApiPath};
use crate::api::state::AppState;
use crate::domain::playlist::{Playlist, PlaylistId};
use crate::domain::track::{catalog, TrackId};
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Request body for creating a playlist
#[derive(Debug, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: Option<String>,
}

/// Request body for replacing a playlist's tracks
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTracksRequest {
    pub requesting_user_id: UserId,
    pub track_ids: Vec<TrackId>,
}

/// Playlist as returned by the API
#[derive(Debug, Serialize)]
pub struct PlaylistResponse {
    pub id: PlaylistId,
    pub owner_id: UserId,
    pub name: String,
    pub description: Option<String>,
    pub tracks: Vec<TrackId>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&Playlist> for PlaylistResponse {
    fn from(playlist: &Playlist) -> Self {
        Self {
            id: playlist.id(),
            owner_id: playlist.owner_id(),
            name: playlist.name().to_string(),
            description: playlist.description().map(str::to_string),
            tracks: playlist.tracks().to_vec(),
            created_at: playlist.created_at(),
            updated_at: playlist.updated_at(),
        }
    }
}

/// Create a playlist owned by a user, seeded with sampled tracks
///
/// POST /users/:user_id/playlists
pub async fn create_playlist(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<UserId>,
    ApiJson(req): ApiJson<CreatePlaylistRequest>,
) -> Result<(StatusCode, Json<PlaylistResponse>), ApiError> {
    let _guard = state.write_gate.lock().await;

    let owner_exists = state
        .users
        .exists(user_id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to load user: {}", e)))?;

    if !owner_exists {
        return Err(DomainError::UserNotFound(user_id).into());
    }

    let initial_tracks = state.track_sampler.sample(&catalog::track_ids());

    let id = state.playlists.next_id().await.map_err(|e| {
        ApiError::internal_server_error(format!("Failed to allocate playlist id: {}", e))
    })?;

    // A sampler handing out ids outside the catalog is a fault, not a client error
    let playlist = Playlist::new(id, user_id, req.name, req.description, initial_tracks)
        .map_err(|e| ApiError::internal_server_error(format!("Sampled tracks rejected: {}", e)))?;

    state
        .playlists
        .save(&playlist)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to save playlist: {}", e)))?;

    tracing::info!(playlist_id = id, owner_id = user_id, "playlist created");

    Ok((StatusCode::CREATED, Json(PlaylistResponse::from(&playlist))))
}

/// List every playlist
///
/// GET /playlists
pub async fn list_playlists(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlaylistResponse>>, ApiError> {
    let playlists = state
        .playlists
        .find_all()
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to list playlists: {}", e)))?;

    let responses = playlists.iter().map(PlaylistResponse::from).collect();

    Ok(Json(responses))
}

/// Replace the track list of a playlist
///
/// PUT /playlists/:playlist_id/tracks
///
/// Only the owner may do this; every id must be in the catalog.
pub async fn update_playlist_tracks(
    State(state): State<AppState>,
    ApiPath(playlist_id): ApiPath<PlaylistId>,
    ApiJson(req): ApiJson<UpdateTracksRequest>,
) -> Result<Json<PlaylistResponse>, ApiError> {
    let _guard = state.write_gate.lock().await;

    let mut playlist = state
        .playlists
        .find_by_id(playlist_id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to load playlist: {}", e)))?
        .ok_or(DomainError::PlaylistNotFound(playlist_id))?;

    playlist.replace_tracks(req.requesting_user_id, req.track_ids)?;

    state
        .playlists
        .save(&playlist)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to save playlist: {}", e)))?;

    Ok(Json(PlaylistResponse::from(&playlist)))
}

/// Delete a playlist
///
/// DELETE /playlists/:playlist_id
///
/// Unlike the track update there is no ownership check here.
pub async fn delete_playlist(
    State(state): State<AppState>,
    ApiPath(playlist_id): ApiPath<PlaylistId>,
) -> Result<StatusCode, ApiError> {
    let _guard = state.write_gate.lock().await;

    let removed = state
        .playlists
        .delete(playlist_id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to delete playlist: {}", e)))?;

    if !removed {
        return Err(DomainError::PlaylistNotFound(playlist_id).into());
    }

    Ok(StatusCode::NO_CONTENT)
}
