use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use super::{
    credentials::LeagueCredentials,
    league::{League, LeagueSource, Player},
    types::{FreeAgentResponse, LeagueResponse},
};
use crate::{
    cli::types::Position,
    core::{league_header_map, FreeAgentFilter, IntoHeaderValue},
    FbbError, Result,
};

#[cfg(test)]
mod tests;

/// Base path for ESPN Fantasy Basketball v3 reads API.
pub const FBA_BASE_URL: &str = "https://lm-api-reads.fantasy.espn.com/apis/v3/games/fba";

/// Views that together carry teams, rosters (with stats) and scoring settings.
const LEAGUE_VIEWS: [&str; 3] = ["mTeam", "mRoster", "mSettings"];

/// Thin reqwest client for the `fba` reads API.
#[derive(Debug, Clone)]
pub struct EspnClient {
    client: Client,
    base_url: String,
}

impl Default for EspnClient {
    fn default() -> Self {
        Self::new()
    }
}

impl EspnClient {
    pub fn new() -> Self {
        Self::with_base_url(FBA_BASE_URL)
    }

    /// Point the client at another host, e.g. a mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn league_url(&self, creds: &LeagueCredentials) -> String {
        format!(
            "{}/seasons/{}/segments/0/leagues/{}",
            self.base_url, creds.season, creds.league_id
        )
    }

    pub async fn get_league(&self, creds: &LeagueCredentials) -> Result<LeagueResponse> {
        let url = self.league_url(creds);
        let params: Vec<(&str, &str)> = LEAGUE_VIEWS.iter().map(|v| ("view", *v)).collect();
        debug!(%url, "fetching league");

        let res = self
            .client
            .get(&url)
            .headers(league_header_map(creds)?)
            .query(&params)
            .send()
            .await?;

        let res = check_status(res).await?;
        Ok(res.json::<LeagueResponse>().await?)
    }

    pub async fn get_free_agents(
        &self,
        creds: &LeagueCredentials,
        position: Option<Position>,
        size: usize,
    ) -> Result<FreeAgentResponse> {
        let url = self.league_url(creds);
        let filter = FreeAgentFilter::new(position, size);
        debug!(%url, ?position, size, "fetching free agents");

        let res = self
            .client
            .get(&url)
            .headers(league_header_map(creds)?)
            .header("x-fantasy-filter", filter.to_header_value()?)
            .query(&[("view", "kona_player_info")])
            .send()
            .await?;

        let res = check_status(res).await?;
        Ok(res.json::<FreeAgentResponse>().await?)
    }
}

/// Turn ESPN's refusal statuses into typed errors.
async fn check_status(res: reqwest::Response) -> Result<reqwest::Response> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(FbbError::Unauthorized);
    }
    let reason = res.text().await.unwrap_or_default();
    Err(FbbError::LeagueUnavailable {
        status: status.as_u16(),
        reason: if reason.is_empty() {
            status.canonical_reason().unwrap_or("unknown").to_string()
        } else {
            reason
        },
    })
}

#[async_trait]
impl LeagueSource for EspnClient {
    async fn fetch_league(&self, creds: &LeagueCredentials) -> Result<League> {
        let response = self.get_league(creds).await?;
        if response.teams.is_empty() {
            return Err(FbbError::NoData);
        }
        Ok(League::from_response(response))
    }

    async fn free_agents(
        &self,
        creds: &LeagueCredentials,
        position: Option<Position>,
        size: usize,
    ) -> Result<Vec<Player>> {
        let response = self.get_free_agents(creds, position, size).await?;
        Ok(response
            .players
            .into_iter()
            .take(size)
            .map(|entry| Player::from_info(entry.player))
            .collect())
    }
}
