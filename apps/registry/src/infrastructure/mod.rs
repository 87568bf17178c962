// Infrastructure layer module
// Contains storage adapters for the domain repository traits
// Follows Hexagonal Architecture

pub mod repositories;
