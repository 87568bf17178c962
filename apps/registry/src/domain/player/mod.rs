// Player domain module
// Players belong to exactly one team and never change after creation

#![allow(clippy::module_inception)]

pub mod events;
pub mod player;
pub mod value_objects;

pub use events::PlayerEvent;
pub use player::Player;
pub use value_objects::PlayerId;
