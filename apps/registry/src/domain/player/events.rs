use crate::domain::team::value_objects::TeamId;

use super::value_objects::PlayerId;

/// Domain events that occur within the Player entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerEvent {
    /// Fired when a player joins the registry
    Created {
        player_id: PlayerId,
        /// Team the player was registered with
        team_id: TeamId,
    },
}

impl PlayerEvent {
    pub fn player_id(&self) -> PlayerId {
        match self {
            PlayerEvent::Created { player_id, .. } => *player_id,
        }
    }
}
