use crate::domain::team::{Team, TeamId};

/// Repository trait for Team aggregate
///
/// Defines the contract for storing and retrieving teams. Implementations
/// must report teams in insertion order, since extremum queries break ties
/// by that order.
pub trait TeamRepository {
    /// Save a team (insert or update)
    ///
    /// Updating keeps the team at its original insertion position.
    fn save(&mut self, team: &Team);

    /// Find a team by its ID
    fn find_by_id(&self, id: TeamId) -> Option<Team>;

    /// Check whether a team with this ID is stored
    fn exists(&self, id: TeamId) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Find all teams in insertion order
    fn find_all(&self) -> Vec<Team>;
}
