use thiserror::Error;

use crate::domain::player::value_objects::PlayerId;
use crate::domain::team::value_objects::TeamId;

/// Errors raised by registry operations
///
/// Each variant is detected before any write happens, so a failed
/// operation never leaves a partially recorded team or player behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("{entity} identifier {id} is already in use")]
    DuplicateIdentifier { entity: &'static str, id: i64 },

    #[error("Team not found: {0}")]
    TeamNotFound(TeamId),

    #[error("Player not found: {0}")]
    PlayerNotFound(PlayerId),

    #[error("Team {0} has no captain assigned")]
    CaptainNotSet(TeamId),

    #[error("Team {0} has no players")]
    EmptyTeam(TeamId),
}

impl RegistryError {
    pub(crate) fn duplicate_team(id: TeamId) -> Self {
        Self::DuplicateIdentifier {
            entity: "team",
            id: id.value(),
        }
    }

    pub(crate) fn duplicate_player(id: PlayerId) -> Self {
        Self::DuplicateIdentifier {
            entity: "player",
            id: id.value(),
        }
    }
}

pub type RegistryResult<T> = Result<T, RegistryError>;
