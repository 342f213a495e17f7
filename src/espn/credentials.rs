//! League credentials shared by the CLI, the session slot and the HTTP facade.

use crate::{
    cli::types::{LeagueId, Season},
    ESPN_S2_ENV_VAR, ESPN_SWID_ENV_VAR,
};
use serde::{Deserialize, Serialize};

/// Everything ESPN needs to serve a (possibly private) league.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueCredentials {
    pub league_id: LeagueId,
    pub season: Season,
    pub espn_s2: String,
    pub swid: String,
}

impl LeagueCredentials {
    pub fn new(
        league_id: LeagueId,
        season: Season,
        espn_s2: impl Into<String>,
        swid: impl Into<String>,
    ) -> Self {
        Self {
            league_id,
            season,
            espn_s2: espn_s2.into(),
            swid: swid.into(),
        }
    }

    /// Credentials with cookies taken from `ESPN_S2` / `ESPN_SWID`, empty when unset.
    pub fn with_env_cookies(league_id: LeagueId, season: Season) -> Self {
        Self::new(
            league_id,
            season,
            std::env::var(ESPN_S2_ENV_VAR).unwrap_or_default(),
            std::env::var(ESPN_SWID_ENV_VAR).unwrap_or_default(),
        )
    }

    /// Public leagues are readable without cookies.
    pub fn has_cookies(&self) -> bool {
        !self.espn_s2.trim().is_empty() && !self.swid.trim().is_empty()
    }
}
