//! Domain model for a fetched league and the adapter trait that produces it.

use async_trait::async_trait;
use std::collections::BTreeMap;

use super::{
    credentials::LeagueCredentials,
    stats_map::{split_suffix, stat_name},
    types::{LeagueResponse, LeagueSettings, PlayerInfo, StatBlock, TeamEntry},
};
use crate::{
    cli::types::{LeagueId, PlayerId, Position, Season, TeamId},
    Result,
};

/// Source of league data. Implemented by [`crate::espn::EspnClient`] and by
/// in-memory fakes in tests.
#[async_trait]
pub trait LeagueSource: Send + Sync {
    /// Fetch teams, rosters and settings. Fails with `Unauthorized` or
    /// `LeagueUnavailable` when ESPN refuses the credentials or league.
    async fn fetch_league(&self, creds: &LeagueCredentials) -> Result<League>;

    /// Top free agents (and waiver players) ordered by percent owned.
    async fn free_agents(
        &self,
        creds: &LeagueCredentials,
        position: Option<Position>,
        size: usize,
    ) -> Result<Vec<Player>>;
}

/// Category name to value, in ascending ESPN stat-id order.
///
/// Order matters: scoring settings are matched to categories by position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatLine(Vec<(String, f64)>);

impl StatLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an ESPN `{"<statId>": value}` map, translating ids to names.
    pub fn from_espn(raw: &BTreeMap<String, f64>) -> Self {
        let mut pairs: Vec<(&String, &f64)> = raw.iter().collect();
        pairs.sort_by_key(|(id, _)| id.parse::<u32>().unwrap_or(u32::MAX));
        pairs
            .into_iter()
            .map(|(id, value)| (stat_name(id), *value))
            .collect()
    }

    pub fn push(&mut self, category: impl Into<String>, value: f64) {
        self.0.push((category.into(), value));
    }

    pub fn get(&self, category: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, v)| *v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, v)| (name.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for StatLine {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Averages and totals for one period.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatSplit {
    pub avg: StatLine,
    pub total: StatLine,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub position: Option<Position>,
    pub injury_status: Option<String>,
    /// Keyed by period, e.g. `2026_total` or `2026_last_15`.
    pub stats: BTreeMap<String, StatSplit>,
}

impl Player {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: PlayerId::new(id),
            name: name.into(),
            position: None,
            injury_status: None,
            stats: BTreeMap::new(),
        }
    }

    /// Attach full-season averages, mostly for building fixtures.
    pub fn with_season_averages(mut self, season: Season, avg: StatLine) -> Self {
        self.stats.insert(
            season.total_key(),
            StatSplit {
                avg,
                total: StatLine::new(),
            },
        );
        self
    }

    /// Full-season averages; `None` when the player has none recorded.
    pub fn season_averages(&self, season: Season) -> Option<&StatLine> {
        self.stats
            .get(&season.total_key())
            .map(|split| &split.avg)
            .filter(|avg| !avg.is_empty())
    }

    pub fn from_info(info: PlayerInfo) -> Self {
        let stats = info
            .stats
            .iter()
            .filter_map(|block| Some((period_key(block)?, split_from_block(block))))
            .collect();

        Self {
            id: PlayerId::new(info.id),
            name: info
                .full_name
                .unwrap_or_else(|| format!("Player {}", info.id)),
            position: Position::from_default_position_id(info.default_position_id),
            injury_status: info.injury_status,
            stats,
        }
    }
}

fn period_key(block: &StatBlock) -> Option<String> {
    let suffix = split_suffix(&block.id)?;
    Some(format!("{}_{}", block.season_id, suffix))
}

fn split_from_block(block: &StatBlock) -> StatSplit {
    StatSplit {
        avg: StatLine::from_espn(&block.average_stats),
        total: StatLine::from_espn(&block.stats),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub abbrev: Option<String>,
    pub roster: Vec<Player>,
}

impl Team {
    pub fn new(id: u32, name: impl Into<String>, roster: Vec<Player>) -> Self {
        Self {
            id: TeamId::new(id),
            name: name.into(),
            abbrev: None,
            roster,
        }
    }

    fn from_entry(entry: TeamEntry) -> Self {
        let name = entry.display_name();
        let roster = entry
            .roster
            .map(|r| {
                r.entries
                    .into_iter()
                    .map(|e| Player::from_info(e.player_pool_entry.player))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            id: TeamId::new(entry.id),
            name,
            abbrev: entry.abbrev,
            roster,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct League {
    pub league_id: LeagueId,
    pub season: Season,
    pub name: Option<String>,
    pub teams: Vec<Team>,
    pub settings: LeagueSettings,
}

impl League {
    pub fn new(league_id: LeagueId, season: Season, teams: Vec<Team>) -> Self {
        Self {
            league_id,
            season,
            name: None,
            teams,
            settings: LeagueSettings::default(),
        }
    }

    pub fn from_response(response: LeagueResponse) -> Self {
        let settings = response.settings.unwrap_or_default();
        Self {
            league_id: LeagueId::new(response.id),
            season: Season::new(response.season_id),
            name: settings.name.clone(),
            teams: response.teams.into_iter().map(Team::from_entry).collect(),
            settings,
        }
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn team_names(&self) -> BTreeMap<TeamId, String> {
        self.teams.iter().map(|t| (t.id, t.name.clone())).collect()
    }

    /// Every rostered player, team by team in league order.
    pub fn rostered_players(&self) -> impl Iterator<Item = &Player> {
        self.teams.iter().flat_map(|t| t.roster.iter())
    }

    /// The player whose season-average keys define the statistics schema:
    /// the first rostered player in league order, whether or not it has
    /// season averages.
    pub fn sample_player(&self) -> Option<&Player> {
        self.rostered_players().next()
    }
}
