// Infrastructure layer module
// Storage adapters and the random source behind track selection
// Follows Hexagonal Architecture

pub mod repositories;
pub mod track_sampler;
