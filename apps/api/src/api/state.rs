use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::AppConfig;
use crate::domain::repositories::{PlaylistRepository, UserRepository};
use crate::domain::track::TrackSampler;
use crate::infrastructure::repositories::{InMemoryPlaylistRepository, InMemoryUserRepository};
use crate::infrastructure::track_sampler::RandomTrackSampler;

/// Application state shared across all handlers
///
/// Handlers that read, check and then write take `write_gate` for the whole
/// sequence so two mutations never interleave.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub playlists: Arc<dyn PlaylistRepository>,
    pub track_sampler: Arc<dyn TrackSampler>,
    pub bcrypt_cost: u32,
    pub write_gate: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserRepository>,
        playlists: Arc<dyn PlaylistRepository>,
        track_sampler: Arc<dyn TrackSampler>,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            users,
            playlists,
            track_sampler,
            bcrypt_cost,
            write_gate: Arc::new(Mutex::new(())),
        }
    }

    /// Builds fresh in-memory stores and the configured track sampler
    pub fn in_memory(config: &AppConfig) -> Self {
        let track_sampler = match config.track_sampler_seed {
            Some(seed) => RandomTrackSampler::seeded(seed),
            None => RandomTrackSampler::new(),
        };

        Self::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryPlaylistRepository::new()),
            Arc::new(track_sampler),
            config.bcrypt_cost,
        )
    }
}
