use crate::domain::player::value_objects::PlayerId;

use super::value_objects::TeamId;

/// Domain events that occur within the Team aggregate
///
/// The registry records them in order and logs each one, which gives a
/// replayable trail of every successful mutation.
///
/// # Example
/// ```
/// use team_registry::domain::team::events::TeamEvent;
/// use team_registry::domain::team::value_objects::TeamId;
///
/// let event = TeamEvent::Created {
///     team_id: TeamId::new(1),
///     name: "Lions".to_string(),
/// };
/// assert_eq!(event.team_id(), TeamId::new(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamEvent {
    /// Fired when a team is created
    Created {
        /// ID of the newly created team
        team_id: TeamId,
        /// Name given at creation
        name: String,
    },
    /// Fired when a player is made captain, replacing any previous captain
    CaptainAssigned {
        team_id: TeamId,
        player_id: PlayerId,
        /// Captain being replaced, if there was one
        previous: Option<PlayerId>,
    },
}

impl TeamEvent {
    /// Returns the team_id for this event
    pub fn team_id(&self) -> TeamId {
        match self {
            TeamEvent::Created { team_id, .. } => *team_id,
            TeamEvent::CaptainAssigned { team_id, .. } => *team_id,
        }
    }
}
