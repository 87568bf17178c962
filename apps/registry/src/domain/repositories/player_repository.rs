use crate::domain::player::{Player, PlayerId};
use crate::domain::team::TeamId;

/// Repository trait for Player entities
///
/// Like [`TeamRepository`](super::TeamRepository), every listing is in
/// insertion order.
pub trait PlayerRepository {
    /// Save a player (insert or update)
    fn save(&mut self, player: &Player);

    /// Find a player by its ID
    fn find_by_id(&self, id: PlayerId) -> Option<Player>;

    /// Check whether a player with this ID is stored
    fn exists(&self, id: PlayerId) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Find all players in insertion order
    fn find_all(&self) -> Vec<Player>;

    /// Find all players registered with a team, in insertion order
    fn find_by_team(&self, team_id: TeamId) -> Vec<Player> {
        self.find_all()
            .into_iter()
            .filter(|player| player.team_id() == team_id)
            .collect()
    }
}
