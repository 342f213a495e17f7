//! Endpoint handlers. Every body is JSON; failures carry an `error` field.

use axum::{body::Bytes, extract::State, Json};
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;
use tracing::{info, warn};

use super::{
    error::{ApiError, ApiResult},
    state::AppState,
};
use crate::{
    espn::{LeagueCredentials, Player},
    session::{credentials_from_object, Session},
    FbbError, Position,
};

/// How many names each free-agent list returns.
pub const TOP_FREE_AGENTS: usize = 10;

const CREDENTIAL_FIELDS: [&str; 4] = ["leagueId", "year", "s2", "swid"];

/// Empty body reads as JSON null; anything else must parse.
fn parse_body(body: &Bytes) -> ApiResult<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(|e| ApiError::bad_request(format!("Invalid JSON: {}", e)))
}

/// Pull league credentials out of a teams/validate request body.
fn credentials_from_body(body: &Value) -> ApiResult<LeagueCredentials> {
    let obj = match body.as_object() {
        Some(obj) if !obj.is_empty() => obj,
        _ => return Err(ApiError::bad_request("No data provided")),
    };
    if !CREDENTIAL_FIELDS.iter().all(|f| obj.contains_key(*f)) {
        return Err(ApiError::bad_request("Missing required fields"));
    }
    credentials_from_object(obj).map_err(|e| ApiError::bad_request(e.to_string()))
}

fn names(players: &[Player]) -> Vec<String> {
    players.iter().map(|p| p.name.clone()).collect()
}

/// POST /set-active-save
pub async fn set_active_save(State(state): State<AppState>, body: Bytes) -> ApiResult<Json<Value>> {
    let failed = |e: ApiError| e.with_field("success", Value::Bool(false));

    let body = parse_body(&body).map_err(failed)?;
    let session = Session::from_request(&body).map_err(|e| failed(ApiError::from(e)))?;
    let summary = state.sessions.set(session);

    Ok(Json(json!({ "success": true, "activeSave": summary })))
}

/// GET /get-active-save
pub async fn get_active_save(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let session = state
        .sessions
        .get()
        .ok_or_else(|| ApiError::not_found(FbbError::NoActiveSession.to_string()))?;
    Ok(Json(json!(session.summary())))
}

/// POST /get-league-teams
pub async fn get_league_teams(State(state): State<AppState>, body: Bytes) -> ApiResult<Json<Value>> {
    let creds = credentials_from_body(&parse_body(&body)?)?;

    let league = state.league.fetch_league(&creds).await.map_err(|e| {
        warn!(league_id = %creds.league_id, error = %e, "league teams fetch failed");
        ApiError::bad_request(e.to_string())
    })?;

    let teams: BTreeMap<String, String> = league
        .team_names()
        .into_iter()
        .map(|(id, name)| (id.to_string(), name))
        .collect();
    Ok(Json(json!({ "teams": teams })))
}

/// POST /validate-league
///
/// A league ESPN refuses is still a well-formed answer: `valid: false`.
pub async fn validate_league(State(state): State<AppState>, body: Bytes) -> ApiResult<Json<Value>> {
    let invalid = |e: ApiError| e.with_field("valid", Value::Bool(false));

    let body = parse_body(&body).map_err(invalid)?;
    let creds = credentials_from_body(&body).map_err(invalid)?;

    match state.league.fetch_league(&creds).await {
        Ok(league) => {
            info!(league_id = %creds.league_id, teams = league.teams.len(), "league validated");
            Ok(Json(json!({ "valid": true })))
        }
        Err(e) if e.is_upstream() => {
            warn!(league_id = %creds.league_id, error = %e, "league validation failed");
            Ok(Json(json!({ "valid": false, "error": e.to_string() })))
        }
        Err(e) => Err(invalid(e.into())),
    }
}

/// GET /get-team-roster
pub async fn get_team_roster(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let session = state.sessions.require(true)?;
    let team_id = session.team_id.ok_or(FbbError::NoTeamSelected)?;

    let league = state.league.fetch_league(&session.credentials).await?;
    let team = league.team(team_id).ok_or(FbbError::TeamNotFound {
        team_id: team_id.as_u32(),
    })?;

    Ok(Json(json!({ "roster": names(&team.roster) })))
}

/// GET /get-top-free-agents
pub async fn get_top_free_agents(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let session = state.sessions.require(false)?;
    let creds = &session.credentials;

    let mut lists = Map::new();
    let overall = state.league.free_agents(creds, None, TOP_FREE_AGENTS).await?;
    lists.insert("OVERALL".to_string(), json!(names(&overall)));

    for position in Position::ALL {
        let players = state
            .league
            .free_agents(creds, Some(position), TOP_FREE_AGENTS)
            .await?;
        lists.insert(position.label().to_string(), json!(names(&players)));
    }

    Ok(Json(json!({ "top_free_agents": lists })))
}
