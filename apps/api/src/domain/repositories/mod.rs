// Repository contracts (ports)
// Implemented by adapters in the infrastructure layer

pub mod playlist_repository;
pub mod user_repository;

pub use playlist_repository::PlaylistRepository;
pub use user_repository::UserRepository;
