use super::catalog::TrackId;

/// Smallest number of tracks assigned to a new playlist
pub const MIN_INITIAL_TRACKS: usize = 1;

/// Largest number of tracks assigned to a new playlist
pub const MAX_INITIAL_TRACKS: usize = 3;

/// Picks the initial track list of a new playlist
///
/// Implementations choose a count uniformly in
/// `MIN_INITIAL_TRACKS..=MAX_INITIAL_TRACKS` (capped by the pool size) and
/// return that many distinct ids drawn from `pool`.
pub trait TrackSampler: Send + Sync {
    fn sample(&self, pool: &[TrackId]) -> Vec<TrackId>;
}
