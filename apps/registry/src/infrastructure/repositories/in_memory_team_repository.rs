use crate::domain::repositories::TeamRepository;
use crate::domain::team::{Team, TeamId};

/// In-memory implementation of TeamRepository
///
/// Teams are kept in a `Vec` so that listings come back in insertion order.
/// Lookups are linear scans, which is fine for a league-sized collection.
#[derive(Debug, Default, Clone)]
pub struct InMemoryTeamRepository {
    teams: Vec<Team>,
}

impl InMemoryTeamRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TeamRepository for InMemoryTeamRepository {
    fn save(&mut self, team: &Team) {
        match self.teams.iter_mut().find(|t| t.id() == team.id()) {
            Some(existing) => *existing = team.clone(),
            None => self.teams.push(team.clone()),
        }
    }

    fn find_by_id(&self, id: TeamId) -> Option<Team> {
        self.teams.iter().find(|t| t.id() == id).cloned()
    }

    fn exists(&self, id: TeamId) -> bool {
        self.teams.iter().any(|t| t.id() == id)
    }

    fn find_all(&self) -> Vec<Team> {
        self.teams.clone()
    }
}
