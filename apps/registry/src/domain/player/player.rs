use super::events::PlayerEvent;
use super::value_objects::PlayerId;
use crate::domain::team::value_objects::TeamId;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Player entity
///
/// A player is registered once with the team it plays for and is immutable
/// from then on.
///
/// # Invariants
/// - `team_id` referenced an existing team when the player was created
/// - No field changes after creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    team_id: TeamId,
    name: String,
    birth_date: NaiveDate,
    skill_level: i32,
    salary: Decimal,
}

impl Player {
    /// Creates a new Player
    ///
    /// Team existence is not checked here; the registry verifies it before
    /// calling this constructor.
    ///
    /// # Returns
    /// The new player and the `Created` event describing it
    pub fn new(
        id: PlayerId,
        team_id: TeamId,
        name: String,
        birth_date: NaiveDate,
        skill_level: i32,
        salary: Decimal,
    ) -> (Self, PlayerEvent) {
        let player = Self {
            id,
            team_id,
            name,
            birth_date,
            skill_level,
            salary,
        };

        let event = PlayerEvent::Created {
            player_id: id,
            team_id,
        };

        (player, event)
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Returns the team this player was registered with
    pub fn team_id(&self) -> TeamId {
        self.team_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn skill_level(&self) -> i32 {
        self.skill_level
    }

    pub fn salary(&self) -> Decimal {
        self.salary
    }
}
