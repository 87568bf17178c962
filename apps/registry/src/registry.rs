use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::errors::{RegistryError, RegistryResult};
use crate::domain::player::{Player, PlayerEvent, PlayerId};
use crate::domain::repositories::{PlayerRepository, TeamRepository};
use crate::domain::team::{JerseyColors, Team, TeamEvent, TeamId};
use crate::infrastructure::repositories::{InMemoryPlayerRepository, InMemoryTeamRepository};

/// Event recorded by the registry after a successful mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryEvent {
    Team(TeamEvent),
    Player(PlayerEvent),
}

impl From<TeamEvent> for RegistryEvent {
    fn from(event: TeamEvent) -> Self {
        RegistryEvent::Team(event)
    }
}

impl From<PlayerEvent> for RegistryEvent {
    fn from(event: PlayerEvent) -> Self {
        RegistryEvent::Player(event)
    }
}

/// Registry of teams and players
///
/// Owns one team collection and one player collection and answers every
/// lookup over them. All operations are synchronous; a registry that must
/// be shared between threads needs a single lock around the whole value,
/// because queries scan full collections.
///
/// # Tie-breaks
/// - `best_player`: first player in insertion order among the most skilled
/// - `oldest_player`: first player in insertion order among the oldest
/// - `highest_paid`: highest player ID among the best paid
/// - `top_players`: equal skill keeps insertion order
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use team_registry::{PlayerId, Registry, TeamId};
///
/// let mut registry = Registry::new();
/// let founded = NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date");
/// registry
///     .create_team(TeamId::new(1), "Lions", founded, "red", "white")
///     .expect("new team");
/// registry
///     .create_player(
///         PlayerId::new(10),
///         TeamId::new(1),
///         "Ana",
///         NaiveDate::from_ymd_opt(1990, 1, 1).expect("valid date"),
///         80,
///         Decimal::from(1000),
///     )
///     .expect("new player");
///
/// registry.assign_captain(PlayerId::new(10)).expect("known player");
/// assert_eq!(registry.get_captain(TeamId::new(1)), Ok(PlayerId::new(10)));
/// ```
#[derive(Debug, Default)]
pub struct Registry<T = InMemoryTeamRepository, P = InMemoryPlayerRepository> {
    teams: T,
    players: P,
    events: Vec<RegistryEvent>,
}

impl Registry {
    /// Creates an empty registry backed by in-memory repositories
    pub fn new() -> Self {
        Self::with_repositories(InMemoryTeamRepository::new(), InMemoryPlayerRepository::new())
    }
}

impl<T: TeamRepository, P: PlayerRepository> Registry<T, P> {
    /// Creates a registry over the given repositories
    pub fn with_repositories(teams: T, players: P) -> Self {
        Self {
            teams,
            players,
            events: Vec::new(),
        }
    }

    /// Events recorded so far, oldest first
    pub fn events(&self) -> &[RegistryEvent] {
        &self.events
    }

    // ===== Commands =====

    /// Registers a new team with no captain
    ///
    /// # Errors
    /// * `DuplicateIdentifier` - a team with `id` already exists
    pub fn create_team(
        &mut self,
        id: TeamId,
        name: impl Into<String>,
        created_on: NaiveDate,
        primary_color: impl Into<String>,
        secondary_color: impl Into<String>,
    ) -> RegistryResult<()> {
        if self.teams.exists(id) {
            return Err(RegistryError::duplicate_team(id));
        }

        let colors = JerseyColors::new(primary_color, secondary_color);
        let (team, event) = Team::new(id, name.into(), created_on, colors);
        self.teams.save(&team);
        self.record(event);

        Ok(())
    }

    /// Registers a new player with an existing team
    ///
    /// # Errors
    /// * `DuplicateIdentifier` - a player with `id` already exists
    /// * `TeamNotFound` - no team with `team_id` exists
    pub fn create_player(
        &mut self,
        id: PlayerId,
        team_id: TeamId,
        name: impl Into<String>,
        birth_date: NaiveDate,
        skill_level: i32,
        salary: Decimal,
    ) -> RegistryResult<()> {
        if self.players.exists(id) {
            return Err(RegistryError::duplicate_player(id));
        }
        if !self.teams.exists(team_id) {
            return Err(RegistryError::TeamNotFound(team_id));
        }

        let (player, event) = Player::new(id, team_id, name.into(), birth_date, skill_level, salary);
        self.players.save(&player);
        self.record(event);

        Ok(())
    }

    /// Makes a player the captain of the team they play for
    ///
    /// # Errors
    /// * `PlayerNotFound` - no player with `player_id` exists
    /// * `TeamNotFound` - the player's team is missing; cannot happen while
    ///   players are only created through [`Registry::create_player`]
    pub fn assign_captain(&mut self, player_id: PlayerId) -> RegistryResult<()> {
        let player = self.player(player_id)?;
        let mut team = self.team(player.team_id())?;

        let event = team.assign_captain(player.id());
        self.teams.save(&team);
        self.record(event);

        Ok(())
    }

    // ===== Queries =====

    /// # Errors
    /// * `TeamNotFound` - no team with `team_id` exists
    /// * `CaptainNotSet` - the team has never had a captain assigned
    pub fn get_captain(&self, team_id: TeamId) -> RegistryResult<PlayerId> {
        self.team(team_id)?
            .captain_id()
            .ok_or(RegistryError::CaptainNotSet(team_id))
    }

    pub fn get_player_name(&self, player_id: PlayerId) -> RegistryResult<String> {
        Ok(self.player(player_id)?.name().to_string())
    }

    pub fn get_team_name(&self, team_id: TeamId) -> RegistryResult<String> {
        Ok(self.team(team_id)?.name().to_string())
    }

    /// IDs of every player on a team, ascending
    pub fn list_team_players(&self, team_id: TeamId) -> RegistryResult<Vec<PlayerId>> {
        let mut ids: Vec<PlayerId> = self
            .team_players(team_id)?
            .iter()
            .map(Player::id)
            .collect();
        ids.sort();
        Ok(ids)
    }

    /// Most skilled player on a team
    ///
    /// # Errors
    /// * `TeamNotFound` - no team with `team_id` exists
    /// * `EmptyTeam` - the team has no players
    pub fn best_player(&self, team_id: TeamId) -> RegistryResult<PlayerId> {
        self.team_players(team_id)?
            .into_iter()
            .reduce(|best, p| {
                if p.skill_level() > best.skill_level() {
                    p
                } else {
                    best
                }
            })
            .map(|p| p.id())
            .ok_or(RegistryError::EmptyTeam(team_id))
    }

    /// Player with the earliest birth date on a team
    ///
    /// # Errors
    /// Same as [`Registry::best_player`].
    pub fn oldest_player(&self, team_id: TeamId) -> RegistryResult<PlayerId> {
        self.team_players(team_id)?
            .into_iter()
            .reduce(|oldest, p| {
                if p.birth_date() < oldest.birth_date() {
                    p
                } else {
                    oldest
                }
            })
            .map(|p| p.id())
            .ok_or(RegistryError::EmptyTeam(team_id))
    }

    /// Best paid player on a team
    ///
    /// # Errors
    /// Same as [`Registry::best_player`].
    pub fn highest_paid(&self, team_id: TeamId) -> RegistryResult<PlayerId> {
        let mut players = self.team_players(team_id)?;
        players.sort_by_key(Player::id);

        players
            .into_iter()
            .reduce(|best, p| if p.salary() >= best.salary() { p } else { best })
            .map(|p| p.id())
            .ok_or(RegistryError::EmptyTeam(team_id))
    }

    /// IDs of every team, ascending
    pub fn all_team_ids(&self) -> Vec<TeamId> {
        tracing::debug!("listing all team ids");
        let mut ids: Vec<TeamId> = self.teams.find_all().iter().map(Team::id).collect();
        ids.sort();
        ids
    }

    /// The `n` most skilled players across all teams
    ///
    /// Returns fewer than `n` IDs when fewer players exist.
    pub fn top_players(&self, n: usize) -> Vec<PlayerId> {
        tracing::debug!(n, "ranking top players");
        let mut players = self.players.find_all();
        players.sort_by(|a, b| b.skill_level().cmp(&a.skill_level()));

        players.iter().take(n).map(Player::id).collect()
    }

    pub fn player_salary(&self, player_id: PlayerId) -> RegistryResult<Decimal> {
        Ok(self.player(player_id)?.salary())
    }

    /// Jersey color the away team wears against the home team
    ///
    /// # Errors
    /// * `TeamNotFound` - either team is missing; the home team is checked
    ///   first
    pub fn away_jersey_color(
        &self,
        home_team_id: TeamId,
        away_team_id: TeamId,
    ) -> RegistryResult<String> {
        let home = self.team(home_team_id)?;
        let away = self.team(away_team_id)?;

        Ok(away.colors().away_color_against(home.colors()).to_string())
    }

    // ===== Helpers =====

    fn team(&self, id: TeamId) -> RegistryResult<Team> {
        tracing::debug!(team_id = %id, "looking up team");
        self.teams
            .find_by_id(id)
            .ok_or(RegistryError::TeamNotFound(id))
    }

    fn player(&self, id: PlayerId) -> RegistryResult<Player> {
        tracing::debug!(player_id = %id, "looking up player");
        self.players
            .find_by_id(id)
            .ok_or(RegistryError::PlayerNotFound(id))
    }

    fn team_players(&self, team_id: TeamId) -> RegistryResult<Vec<Player>> {
        tracing::debug!(team_id = %team_id, "collecting team players");
        if !self.teams.exists(team_id) {
            return Err(RegistryError::TeamNotFound(team_id));
        }
        Ok(self.players.find_by_team(team_id))
    }

    fn record(&mut self, event: impl Into<RegistryEvent>) {
        let event = event.into();
        tracing::info!(?event, "registry updated");
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn team(registry: &mut Registry, id: i64, primary: &str, secondary: &str) {
        registry
            .create_team(
                TeamId::new(id),
                format!("Team {}", id),
                date(2020, 1, 1),
                primary,
                secondary,
            )
            .unwrap();
    }

    fn player(registry: &mut Registry, id: i64, team: i64, born: NaiveDate, skill: i32, salary: i64) {
        registry
            .create_player(
                PlayerId::new(id),
                TeamId::new(team),
                format!("Player {}", id),
                born,
                skill,
                Decimal::from(salary),
            )
            .unwrap();
    }

    #[test]
    fn created_names_are_returned() {
        let mut registry = Registry::new();
        team(&mut registry, 1, "red", "white");
        player(&mut registry, 10, 1, date(1990, 1, 1), 50, 1000);

        assert_eq!(registry.get_team_name(TeamId::new(1)).unwrap(), "Team 1");
        assert_eq!(registry.get_player_name(PlayerId::new(10)).unwrap(), "Player 10");
    }

    #[test]
    fn duplicate_team_is_rejected_and_state_unchanged() {
        let mut registry = Registry::new();
        team(&mut registry, 1, "red", "white");

        let result = registry.create_team(TeamId::new(1), "Other", date(2021, 1, 1), "blue", "gold");

        assert_eq!(
            result,
            Err(RegistryError::DuplicateIdentifier { entity: "team", id: 1 })
        );
        assert_eq!(registry.get_team_name(TeamId::new(1)).unwrap(), "Team 1");
        assert_eq!(registry.all_team_ids(), vec![TeamId::new(1)]);
        assert_eq!(registry.events().len(), 1);
    }

    #[test]
    fn duplicate_player_is_rejected_before_team_check() {
        let mut registry = Registry::new();
        team(&mut registry, 1, "red", "white");
        player(&mut registry, 10, 1, date(1990, 1, 1), 50, 1000);

        let result = registry.create_player(
            PlayerId::new(10),
            TeamId::new(99),
            "Dup",
            date(1991, 1, 1),
            10,
            Decimal::ZERO,
        );

        assert!(matches!(
            result,
            Err(RegistryError::DuplicateIdentifier { entity: "player", id: 10 })
        ));
        assert_eq!(registry.get_player_name(PlayerId::new(10)).unwrap(), "Player 10");
    }

    #[test]
    fn player_for_missing_team_is_not_added() {
        let mut registry = Registry::new();

        let result = registry.create_player(
            PlayerId::new(10),
            TeamId::new(1),
            "Orphan",
            date(1990, 1, 1),
            50,
            Decimal::ZERO,
        );

        assert_eq!(result, Err(RegistryError::TeamNotFound(TeamId::new(1))));
        assert_eq!(
            registry.get_player_name(PlayerId::new(10)),
            Err(RegistryError::PlayerNotFound(PlayerId::new(10)))
        );
        assert!(registry.top_players(5).is_empty());
    }

    #[test]
    fn team_and_player_ids_are_independent() {
        let mut registry = Registry::new();
        team(&mut registry, 1, "red", "white");
        player(&mut registry, 1, 1, date(1990, 1, 1), 50, 1000);

        assert_eq!(registry.get_player_name(PlayerId::new(1)).unwrap(), "Player 1");
    }

    #[test]
    fn captain_lifecycle() {
        let mut registry = Registry::new();
        team(&mut registry, 1, "red", "white");
        player(&mut registry, 10, 1, date(1990, 1, 1), 50, 1000);
        player(&mut registry, 11, 1, date(1990, 1, 1), 50, 1000);

        assert_eq!(
            registry.get_captain(TeamId::new(1)),
            Err(RegistryError::CaptainNotSet(TeamId::new(1)))
        );

        registry.assign_captain(PlayerId::new(10)).unwrap();
        assert_eq!(registry.get_captain(TeamId::new(1)), Ok(PlayerId::new(10)));

        registry.assign_captain(PlayerId::new(11)).unwrap();
        assert_eq!(registry.get_captain(TeamId::new(1)), Ok(PlayerId::new(11)));
    }

    #[test]
    fn captain_errors() {
        let mut registry = Registry::new();

        assert_eq!(
            registry.assign_captain(PlayerId::new(1)),
            Err(RegistryError::PlayerNotFound(PlayerId::new(1)))
        );
        assert_eq!(
            registry.get_captain(TeamId::new(1)),
            Err(RegistryError::TeamNotFound(TeamId::new(1)))
        );
    }

    #[test]
    fn captain_goes_to_the_players_own_team() {
        let mut registry = Registry::new();
        team(&mut registry, 1, "red", "white");
        team(&mut registry, 2, "blue", "white");
        player(&mut registry, 20, 2, date(1990, 1, 1), 50, 1000);

        registry.assign_captain(PlayerId::new(20)).unwrap();

        assert_eq!(registry.get_captain(TeamId::new(2)), Ok(PlayerId::new(20)));
        assert_eq!(
            registry.get_captain(TeamId::new(1)),
            Err(RegistryError::CaptainNotSet(TeamId::new(1)))
        );
    }

    #[test]
    fn list_team_players_sorted_by_id() {
        let mut registry = Registry::new();
        team(&mut registry, 1, "red", "white");
        team(&mut registry, 2, "blue", "white");
        player(&mut registry, 30, 1, date(1990, 1, 1), 50, 1000);
        player(&mut registry, 10, 1, date(1990, 1, 1), 50, 1000);
        player(&mut registry, 15, 2, date(1990, 1, 1), 50, 1000);
        player(&mut registry, 20, 1, date(1990, 1, 1), 50, 1000);

        assert_eq!(
            registry.list_team_players(TeamId::new(1)).unwrap(),
            vec![PlayerId::new(10), PlayerId::new(20), PlayerId::new(30)]
        );
        assert_eq!(
            registry.list_team_players(TeamId::new(3)),
            Err(RegistryError::TeamNotFound(TeamId::new(3)))
        );
    }

    #[test]
    fn list_team_players_of_empty_team() {
        let mut registry = Registry::new();
        team(&mut registry, 1, "red", "white");

        assert!(registry.list_team_players(TeamId::new(1)).unwrap().is_empty());
    }

    #[test]
    fn best_player_prefers_first_among_equal_skill() {
        let mut registry = Registry::new();
        team(&mut registry, 1, "red", "white");
        player(&mut registry, 1, 1, date(1990, 1, 1), 50, 1000);
        player(&mut registry, 2, 1, date(1990, 1, 1), 80, 1000);
        player(&mut registry, 3, 1, date(1990, 1, 1), 80, 2000);

        assert_eq!(registry.best_player(TeamId::new(1)), Ok(PlayerId::new(2)));
    }

    #[test]
    fn oldest_player_has_earliest_birth_date() {
        let mut registry = Registry::new();
        team(&mut registry, 1, "red", "white");
        player(&mut registry, 1, 1, date(1990, 1, 1), 50, 1000);
        player(&mut registry, 2, 1, date(1985, 1, 1), 50, 1000);

        assert_eq!(registry.oldest_player(TeamId::new(1)), Ok(PlayerId::new(2)));
    }

    #[test]
    fn oldest_player_tie_goes_to_first_inserted() {
        let mut registry = Registry::new();
        team(&mut registry, 1, "red", "white");
        player(&mut registry, 7, 1, date(1985, 1, 1), 50, 1000);
        player(&mut registry, 3, 1, date(1985, 1, 1), 50, 1000);
        player(&mut registry, 5, 1, date(1999, 1, 1), 50, 1000);

        assert_eq!(registry.oldest_player(TeamId::new(1)), Ok(PlayerId::new(7)));
    }

    #[test]
    fn highest_paid_tie_goes_to_highest_id() {
        let mut registry = Registry::new();
        team(&mut registry, 1, "red", "white");
        player(&mut registry, 9, 1, date(1990, 1, 1), 50, 3000);
        player(&mut registry, 4, 1, date(1990, 1, 1), 50, 3000);
        player(&mut registry, 12, 1, date(1990, 1, 1), 50, 1000);

        assert_eq!(registry.highest_paid(TeamId::new(1)), Ok(PlayerId::new(9)));
    }

    #[test]
    fn highest_paid_compares_decimal_salaries() {
        let mut registry = Registry::new();
        team(&mut registry, 1, "red", "white");
        for (id, salary) in [(1, "1000.10"), (2, "1000.09"), (3, "999.99")] {
            registry
                .create_player(
                    PlayerId::new(id),
                    TeamId::new(1),
                    "P",
                    date(1990, 1, 1),
                    1,
                    Decimal::from_str(salary).unwrap(),
                )
                .unwrap();
        }

        assert_eq!(registry.highest_paid(TeamId::new(1)), Ok(PlayerId::new(1)));
    }

    #[test]
    fn extremum_queries_on_empty_team() {
        let mut registry = Registry::new();
        team(&mut registry, 1, "red", "white");
        let empty = Err(RegistryError::EmptyTeam(TeamId::new(1)));

        assert_eq!(registry.best_player(TeamId::new(1)), empty);
        assert_eq!(registry.oldest_player(TeamId::new(1)), empty);
        assert_eq!(registry.highest_paid(TeamId::new(1)), empty);
    }

    #[test]
    fn extremum_queries_on_missing_team() {
        let registry = Registry::new();
        let missing = Err(RegistryError::TeamNotFound(TeamId::new(4)));

        assert_eq!(registry.best_player(TeamId::new(4)), missing);
        assert_eq!(registry.oldest_player(TeamId::new(4)), missing);
        assert_eq!(registry.highest_paid(TeamId::new(4)), missing);
    }

    #[test]
    fn all_team_ids_sorted_regardless_of_insertion() {
        let mut registry = Registry::new();
        assert!(registry.all_team_ids().is_empty());

        for id in [5, 1, 3] {
            team(&mut registry, id, "red", "white");
        }

        assert_eq!(
            registry.all_team_ids(),
            vec![TeamId::new(1), TeamId::new(3), TeamId::new(5)]
        );
    }

    #[test]
    fn top_players_descending_and_stable() {
        let mut registry = Registry::new();
        team(&mut registry, 1, "red", "white");
        team(&mut registry, 2, "blue", "white");
        player(&mut registry, 1, 1, date(1990, 1, 1), 60, 1000);
        player(&mut registry, 2, 2, date(1990, 1, 1), 90, 1000);
        player(&mut registry, 3, 1, date(1990, 1, 1), 60, 1000);
        player(&mut registry, 4, 2, date(1990, 1, 1), 75, 1000);

        assert_eq!(
            registry.top_players(3),
            vec![PlayerId::new(2), PlayerId::new(4), PlayerId::new(1)]
        );
        assert_eq!(registry.top_players(10).len(), 4);
        assert_eq!(registry.top_players(4)[3], PlayerId::new(3));
        assert!(registry.top_players(0).is_empty());
    }

    #[test]
    fn player_salary_lookup() {
        let mut registry = Registry::new();
        team(&mut registry, 1, "red", "white");
        player(&mut registry, 1, 1, date(1990, 1, 1), 60, 2500);

        assert_eq!(registry.player_salary(PlayerId::new(1)), Ok(Decimal::from(2500)));
        assert_eq!(
            registry.player_salary(PlayerId::new(2)),
            Err(RegistryError::PlayerNotFound(PlayerId::new(2)))
        );
    }

    #[test]
    fn away_jersey_color_rules() {
        let mut registry = Registry::new();
        team(&mut registry, 1, "red", "white");
        team(&mut registry, 2, "blue", "white");
        team(&mut registry, 3, "red", "black");

        assert_eq!(registry.away_jersey_color(TeamId::new(1), TeamId::new(2)).unwrap(), "blue");
        assert_eq!(registry.away_jersey_color(TeamId::new(1), TeamId::new(3)).unwrap(), "black");
        assert_eq!(
            registry.away_jersey_color(TeamId::new(9), TeamId::new(2)),
            Err(RegistryError::TeamNotFound(TeamId::new(9)))
        );
        assert_eq!(
            registry.away_jersey_color(TeamId::new(1), TeamId::new(8)),
            Err(RegistryError::TeamNotFound(TeamId::new(8)))
        );
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn queries_log_at_debug_level() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut registry = Registry::new();
            team(&mut registry, 1, "red", "white");
            let _ = registry.get_team_name(TeamId::new(1));
            let _ = registry.top_players(3);
        });

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("DEBUG"));
        assert!(output.contains("looking up team"));
        assert!(output.contains("ranking top players"));
    }

    #[test]
    fn events_follow_successful_mutations_only() {
        let mut registry = Registry::new();
        team(&mut registry, 1, "red", "white");
        player(&mut registry, 10, 1, date(1990, 1, 1), 50, 1000);
        let _ = registry.assign_captain(PlayerId::new(99));
        registry.assign_captain(PlayerId::new(10)).unwrap();

        assert_eq!(
            registry.events(),
            &[
                RegistryEvent::Team(TeamEvent::Created {
                    team_id: TeamId::new(1),
                    name: "Team 1".to_string(),
                }),
                RegistryEvent::Player(PlayerEvent::Created {
                    player_id: PlayerId::new(10),
                    team_id: TeamId::new(1),
                }),
                RegistryEvent::Team(TeamEvent::CaptainAssigned {
                    team_id: TeamId::new(1),
                    player_id: PlayerId::new(10),
                    previous: None,
                }),
            ]
        );
    }
}
