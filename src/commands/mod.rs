//! Command implementations for the ESPN Fantasy Basketball CLI

pub mod chat;
pub mod league_data;
pub mod player_stats;
pub mod serve;

use crate::{espn::LeagueCredentials, FbbError, LeagueId, Result, Season, LEAGUE_ID_ENV_VAR};


/// League id from the flag, else from `ESPN_FBB_LEAGUE_ID`.
pub fn resolve_league_id(league_id: Option<LeagueId>) -> Result<LeagueId> {
    league_id
        .or_else(|| {
            std::env::var(LEAGUE_ID_ENV_VAR)
                .ok()
                .and_then(|s| s.trim().parse::<LeagueId>().ok())
        })
        .ok_or_else(|| FbbError::MissingLeagueId {
            env_var: LEAGUE_ID_ENV_VAR.to_string(),
        })
}

/// Credentials for CLI commands; cookies come from the environment.
pub fn resolve_credentials(league_id: Option<LeagueId>, season: Season) -> Result<LeagueCredentials> {
    Ok(LeagueCredentials::with_env_cookies(
        resolve_league_id(league_id)?,
        season,
    ))
}
