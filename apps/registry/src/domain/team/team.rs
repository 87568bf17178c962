use super::events::TeamEvent;
use super::value_objects::{JerseyColors, TeamId};
use crate::domain::player::value_objects::PlayerId;
use chrono::NaiveDate;

/// Team aggregate root
///
/// Represents a team registered with the registry, along with its jersey
/// colors and the player currently designated as captain.
///
/// # Invariants
/// - The identifier is supplied by the caller and never changes
/// - The captain, once set, is a player of this same team (the registry
///   only assigns captains through the player's own team)
/// - Only the captain can change after creation
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use team_registry::domain::team::{JerseyColors, Team, TeamId};
///
/// let (team, event) = Team::new(
///     TeamId::new(1),
///     "Lions".to_string(),
///     NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date"),
///     JerseyColors::new("red", "white"),
/// );
///
/// assert_eq!(team.name(), "Lions");
/// assert_eq!(event.team_id(), team.id());
/// assert!(team.captain_id().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    id: TeamId,
    name: String,
    created_on: NaiveDate,
    colors: JerseyColors,
    captain_id: Option<PlayerId>,
}

impl Team {
    /// Creates a new Team aggregate with no captain
    ///
    /// # Arguments
    /// * `id` - Externally supplied identifier
    /// * `name` - Display name
    /// * `created_on` - Founding date of the team
    /// * `colors` - Primary and secondary jersey colors
    ///
    /// # Returns
    /// The new team and the `Created` event describing it
    pub fn new(
        id: TeamId,
        name: String,
        created_on: NaiveDate,
        colors: JerseyColors,
    ) -> (Self, TeamEvent) {
        let team = Self {
            id,
            name,
            created_on,
            colors,
            captain_id: None,
        };

        let event = TeamEvent::Created {
            team_id: team.id,
            name: team.name.clone(),
        };

        (team, event)
    }

    /// Designates `player_id` as captain, replacing any previous captain
    ///
    /// The caller is responsible for passing a player that belongs to this
    /// team.
    pub fn assign_captain(&mut self, player_id: PlayerId) -> TeamEvent {
        let previous = self.captain_id.replace(player_id);

        TeamEvent::CaptainAssigned {
            team_id: self.id,
            player_id,
            previous,
        }
    }

    // ===== Getters =====

    pub fn id(&self) -> TeamId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_on(&self) -> NaiveDate {
        self.created_on
    }

    pub fn colors(&self) -> &JerseyColors {
        &self.colors
    }

    /// Returns the captain's player ID if one was assigned
    pub fn captain_id(&self) -> Option<PlayerId> {
        self.captain_id
    }
}
