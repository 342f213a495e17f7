//! The single, process-wide active session (the "active save").
//!
//! Handlers never read the slot field by field: they take a cloned snapshot
//! under the lock and work from that, so a concurrent replace cannot mix the
//! credentials of two sessions.

use serde::Serialize;
use serde_json::Value;
use std::sync::{Mutex, MutexGuard};
use tracing::info;

use crate::{
    cli::types::{LeagueId, Season, TeamId},
    espn::LeagueCredentials,
    FbbError, Result,
};

/// A selected league with its credentials and, optionally, the user's team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: String,
    pub credentials: LeagueCredentials,
    pub team_id: Option<TeamId>,
}

/// What the facade echoes back; never includes cookies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub id: String,
    pub league_id: LeagueId,
    pub year: Season,
    pub team_id: Option<TeamId>,
}

impl Session {
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            id: self.id.clone(),
            league_id: self.credentials.league_id,
            year: self.credentials.season,
            team_id: self.team_id,
        }
    }

    /// Validate a set-active-save body.
    ///
    /// Returns `Ok(None)` when the body is null or carries no `saveId`, which
    /// means "clear the session". The `teamId` key must be present but may be
    /// null.
    pub fn from_request(body: &Value) -> Result<Option<Session>> {
        let Some(obj) = body.as_object() else {
            return if body.is_null() {
                Ok(None)
            } else {
                Err(FbbError::validation("Request body must be a JSON object"))
            };
        };

        let id = match obj.get("saveId") {
            None | Some(Value::Null) => return Ok(None),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(_) => return Err(FbbError::validation("saveId must be a string")),
        };

        let team_id = match obj.get("teamId") {
            None => return Err(FbbError::validation("Missing teamId")),
            Some(Value::Null) => None,
            Some(v) => Some(TeamId::new(int_value(v, "teamId")?)),
        };

        let credentials = credentials_from_object(obj)?;
        Ok(Some(Session {
            id,
            credentials,
            team_id,
        }))
    }
}

/// Read `leagueId`, `year`, `s2` and `swid` from a request object.
pub fn credentials_from_object(obj: &serde_json::Map<String, Value>) -> Result<LeagueCredentials> {
    let league_id = int_value(required(obj, "leagueId")?, "leagueId")?;
    let year = int_value(required(obj, "year")?, "year")?;
    let year = u16::try_from(year)
        .map_err(|_| FbbError::validation(format!("year out of range: {}", year)))?;

    Ok(LeagueCredentials::new(
        LeagueId::new(league_id),
        Season::new(year),
        string_value(required(obj, "s2")?, "s2")?,
        string_value(required(obj, "swid")?, "swid")?,
    ))
}

fn required<'a>(obj: &'a serde_json::Map<String, Value>, key: &str) -> Result<&'a Value> {
    obj.get(key)
        .ok_or_else(|| FbbError::validation(format!("Missing field: {}", key)))
}

/// Accept JSON integers and numeric strings, like the web client sends both.
fn int_value(value: &Value, key: &str) -> Result<u32> {
    let parsed = match value {
        Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| FbbError::validation(format!("Invalid {}: {}", key, value)))
}

fn string_value(value: &Value, key: &str) -> Result<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| FbbError::validation(format!("{} must be a string", key)))
}

/// Single-slot holder for the active session.
#[derive(Debug, Default)]
pub struct SessionSlot {
    inner: Mutex<Option<Session>>,
}

impl SessionSlot {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Option<Session>> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Replace the session, or clear it with `None`. Returns the new summary.
    pub fn set(&self, session: Option<Session>) -> Option<SessionSummary> {
        let summary = session.as_ref().map(Session::summary);
        match &summary {
            Some(s) => info!(save_id = %s.id, league_id = %s.league_id, year = %s.year, "active save set"),
            None => info!("active save cleared"),
        }
        *self.lock() = session;
        summary
    }

    pub fn clear(&self) {
        self.set(None);
    }

    /// Snapshot of the current session.
    pub fn get(&self) -> Option<Session> {
        self.lock().clone()
    }

    /// Snapshot that must exist, and optionally must have a team selected.
    pub fn require(&self, check_team: bool) -> Result<Session> {
        let session = self.get().ok_or(FbbError::NoActiveSession)?;
        if check_team && session.team_id.is_none() {
            return Err(FbbError::NoTeamSelected);
        }
        Ok(session)
    }
}
