use crate::domain::player::{Player, PlayerId};
use crate::domain::repositories::PlayerRepository;
use crate::domain::team::TeamId;

/// In-memory implementation of PlayerRepository
///
/// Same storage strategy as
/// [`InMemoryTeamRepository`](super::InMemoryTeamRepository).
#[derive(Debug, Default, Clone)]
pub struct InMemoryPlayerRepository {
    players: Vec<Player>,
}

impl InMemoryPlayerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlayerRepository for InMemoryPlayerRepository {
    fn save(&mut self, player: &Player) {
        match self.players.iter_mut().find(|p| p.id() == player.id()) {
            Some(existing) => *existing = player.clone(),
            None => self.players.push(player.clone()),
        }
    }

    fn find_by_id(&self, id: PlayerId) -> Option<Player> {
        self.players.iter().find(|p| p.id() == id).cloned()
    }

    fn exists(&self, id: PlayerId) -> bool {
        self.players.iter().any(|p| p.id() == id)
    }

    fn find_all(&self) -> Vec<Player> {
        self.players.clone()
    }

    fn find_by_team(&self, team_id: TeamId) -> Vec<Player> {
        self.players
            .iter()
            .filter(|p| p.team_id() == team_id)
            .cloned()
            .collect()
    }
}
