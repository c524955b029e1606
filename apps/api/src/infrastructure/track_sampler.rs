use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::domain::track::sampler::{MAX_INITIAL_TRACKS, MIN_INITIAL_TRACKS};
use crate::domain::track::{TrackId, TrackSampler};

/// TrackSampler backed by a seedable RNG
pub struct RandomTrackSampler {
    rng: Mutex<StdRng>,
}

impl RandomTrackSampler {
    /// Creates a sampler seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Creates a sampler that yields the same sequence for the same seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomTrackSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackSampler for RandomTrackSampler {
    fn sample(&self, pool: &[TrackId]) -> Vec<TrackId> {
        let upper = MAX_INITIAL_TRACKS.min(pool.len());
        if upper < MIN_INITIAL_TRACKS {
            return Vec::new();
        }

        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let count = rng.gen_range(MIN_INITIAL_TRACKS..=upper);
        pool.choose_multiple(&mut *rng, count).copied().collect()
    }
}

/// TrackSampler that always returns the same list
///
/// Used to make playlist creation deterministic.
#[derive(Debug, Clone)]
pub struct FixedTrackSampler {
    tracks: Vec<TrackId>,
}

impl FixedTrackSampler {
    pub fn new(tracks: Vec<TrackId>) -> Self {
        Self { tracks }
    }
}

impl TrackSampler for FixedTrackSampler {
    fn sample(&self, _pool: &[TrackId]) -> Vec<TrackId> {
        self.tracks.clone()
    }
}
