//! Name-based operation dispatch
//!
//! External harnesses drive the registry by operation name with JSON
//! arguments. [`OPERATIONS`] is the explicit name-to-handler table; each
//! handler deserializes its arguments with serde, calls the [`Registry`],
//! and serializes the result.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

use crate::domain::errors::RegistryError;
use crate::domain::player::PlayerId;
use crate::domain::team::TeamId;
use crate::registry::Registry;

/// Errors produced while dispatching an operation by name
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Invalid arguments for {operation}: {source}")]
    InvalidArguments {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

pub type Handler = fn(&mut Registry, Value) -> Result<Value, OperationError>;

/// One operation invocation, as read from a script line
///
/// ```
/// use team_registry::operations::OperationRequest;
///
/// let request: OperationRequest =
///     serde_json::from_str(r#"{"op": "get_team_name", "args": {"team_id": 1}}"#)
///         .expect("valid request");
/// assert_eq!(request.op, "get_team_name");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationRequest {
    pub op: String,
    #[serde(default)]
    pub args: Value,
}

/// Every operation the registry exposes by name
pub const OPERATIONS: &[(&str, Handler)] = &[
    ("create_team", create_team),
    ("create_player", create_player),
    ("assign_captain", assign_captain),
    ("get_captain", get_captain),
    ("get_player_name", get_player_name),
    ("get_team_name", get_team_name),
    ("list_team_players", list_team_players),
    ("best_player", best_player),
    ("oldest_player", oldest_player),
    ("highest_paid", highest_paid),
    ("all_team_ids", all_team_ids),
    ("top_players", top_players),
    ("player_salary", player_salary),
    ("away_jersey_color", away_jersey_color),
];

/// Looks up the handler registered under `name`
pub fn handler(name: &str) -> Option<Handler> {
    OPERATIONS
        .iter()
        .find(|(op, _)| *op == name)
        .map(|(_, handler)| *handler)
}

/// Runs one request against the registry
pub fn dispatch(registry: &mut Registry, request: &OperationRequest) -> Result<Value, OperationError> {
    let handler = handler(&request.op)
        .ok_or_else(|| OperationError::UnknownOperation(request.op.clone()))?;

    tracing::debug!(op = %request.op, "dispatching operation");
    handler(registry, request.args.clone())
}

fn parse<A: DeserializeOwned>(operation: &'static str, args: Value) -> Result<A, OperationError> {
    // Operations without arguments may omit `args` entirely.
    let args = if args.is_null() { json!({}) } else { args };
    serde_json::from_value(args).map_err(|source| OperationError::InvalidArguments { operation, source })
}

// ===== Argument shapes =====

#[derive(Debug, Deserialize)]
struct CreateTeamArgs {
    id: TeamId,
    name: String,
    created_on: NaiveDate,
    primary_color: String,
    secondary_color: String,
}

#[derive(Debug, Deserialize)]
struct CreatePlayerArgs {
    id: PlayerId,
    team_id: TeamId,
    name: String,
    birth_date: NaiveDate,
    skill_level: i32,
    salary: Decimal,
}

#[derive(Debug, Deserialize)]
struct TeamArgs {
    team_id: TeamId,
}

#[derive(Debug, Deserialize)]
struct PlayerArgs {
    player_id: PlayerId,
}

#[derive(Debug, Deserialize)]
struct TopPlayersArgs {
    n: usize,
}

#[derive(Debug, Deserialize)]
struct MatchupArgs {
    home_team_id: TeamId,
    away_team_id: TeamId,
}

#[derive(Debug, Deserialize)]
struct NoArgs {}

// ===== Handlers =====

fn create_team(registry: &mut Registry, args: Value) -> Result<Value, OperationError> {
    let a: CreateTeamArgs = parse("create_team", args)?;
    registry.create_team(a.id, a.name, a.created_on, a.primary_color, a.secondary_color)?;
    Ok(Value::Null)
}

fn create_player(registry: &mut Registry, args: Value) -> Result<Value, OperationError> {
    let a: CreatePlayerArgs = parse("create_player", args)?;
    registry.create_player(a.id, a.team_id, a.name, a.birth_date, a.skill_level, a.salary)?;
    Ok(Value::Null)
}

fn assign_captain(registry: &mut Registry, args: Value) -> Result<Value, OperationError> {
    let a: PlayerArgs = parse("assign_captain", args)?;
    registry.assign_captain(a.player_id)?;
    Ok(Value::Null)
}

fn get_captain(registry: &mut Registry, args: Value) -> Result<Value, OperationError> {
    let a: TeamArgs = parse("get_captain", args)?;
    Ok(json!(registry.get_captain(a.team_id)?))
}

fn get_player_name(registry: &mut Registry, args: Value) -> Result<Value, OperationError> {
    let a: PlayerArgs = parse("get_player_name", args)?;
    Ok(json!(registry.get_player_name(a.player_id)?))
}

fn get_team_name(registry: &mut Registry, args: Value) -> Result<Value, OperationError> {
    let a: TeamArgs = parse("get_team_name", args)?;
    Ok(json!(registry.get_team_name(a.team_id)?))
}

fn list_team_players(registry: &mut Registry, args: Value) -> Result<Value, OperationError> {
    let a: TeamArgs = parse("list_team_players", args)?;
    Ok(json!(registry.list_team_players(a.team_id)?))
}

fn best_player(registry: &mut Registry, args: Value) -> Result<Value, OperationError> {
    let a: TeamArgs = parse("best_player", args)?;
    Ok(json!(registry.best_player(a.team_id)?))
}

fn oldest_player(registry: &mut Registry, args: Value) -> Result<Value, OperationError> {
    let a: TeamArgs = parse("oldest_player", args)?;
    Ok(json!(registry.oldest_player(a.team_id)?))
}

fn highest_paid(registry: &mut Registry, args: Value) -> Result<Value, OperationError> {
    let a: TeamArgs = parse("highest_paid", args)?;
    Ok(json!(registry.highest_paid(a.team_id)?))
}

fn all_team_ids(registry: &mut Registry, args: Value) -> Result<Value, OperationError> {
    let _: NoArgs = parse("all_team_ids", args)?;
    Ok(json!(registry.all_team_ids()))
}

fn top_players(registry: &mut Registry, args: Value) -> Result<Value, OperationError> {
    let a: TopPlayersArgs = parse("top_players", args)?;
    Ok(json!(registry.top_players(a.n)))
}

fn player_salary(registry: &mut Registry, args: Value) -> Result<Value, OperationError> {
    let a: PlayerArgs = parse("player_salary", args)?;
    Ok(json!(registry.player_salary(a.player_id)?))
}

fn away_jersey_color(registry: &mut Registry, args: Value) -> Result<Value, OperationError> {
    let a: MatchupArgs = parse("away_jersey_color", args)?;
    Ok(json!(registry.away_jersey_color(a.home_team_id, a.away_team_id)?))
}
