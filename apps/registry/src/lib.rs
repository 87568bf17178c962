//! Team Registry Library
//!
//! An in-memory registry of teams and players, with lookups such as a
//! team's captain, its oldest or best player, the global top players, and
//! the away jersey color for a matchup. Includes the domain model, the
//! repository adapters, and a name-based dispatch table for script drivers.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod operations;
pub mod registry;
pub mod script;

pub use domain::errors::{RegistryError, RegistryResult};
pub use domain::player::PlayerId;
pub use domain::team::TeamId;
pub use registry::{Registry, RegistryEvent};
