// Repository traits (ports) for the registry's two collections
// Adapters live in crate::infrastructure::repositories

pub mod player_repository;
pub mod team_repository;

pub use player_repository::PlayerRepository;
pub use team_repository::TeamRepository;
