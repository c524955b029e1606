// Track catalog and initial track selection

pub mod catalog;
pub mod sampler;

pub use catalog::{Track, TrackId};
pub use sampler::TrackSampler;
