//! Raw ESPN fantasy basketball payloads.
//!
//! These mirror the JSON returned by the `fba` reads API closely and are
//! converted into the domain model in [`crate::espn::league`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;


#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScoringItem {
    #[serde(rename = "statId")]
    pub stat_id: u16,
    /// Point weight of the category; zero means the category is not scored.
    #[serde(default)]
    pub points: f64,
    /// Lower-is-better categories such as turnovers.
    #[serde(rename = "isReverseItem", default)]
    pub is_reverse_item: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ScoringSettings {
    #[serde(rename = "scoringItems", default)]
    pub scoring_items: Vec<ScoringItem>,
    #[serde(rename = "scoringType", default)]
    pub scoring_type: Option<String>,
}

/// `settings` object of the `mSettings` view.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct LeagueSettings {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "scoringSettings", default)]
    pub scoring_settings: ScoringSettings,
}

/// Top-level league document for `view=mTeam&view=mRoster&view=mSettings`.
#[derive(Debug, Clone, Deserialize)]
pub struct LeagueResponse {
    pub id: u32,
    #[serde(rename = "seasonId")]
    pub season_id: u16,
    #[serde(default)]
    pub teams: Vec<TeamEntry>,
    #[serde(default)]
    pub settings: Option<LeagueSettings>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamEntry {
    pub id: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub abbrev: Option<String>,
    #[serde(default)]
    pub roster: Option<RosterPayload>,
}

impl TeamEntry {
    /// Team display name. Older seasons split it into location + nickname.
    pub fn display_name(&self) -> String {
        if let Some(name) = self.name.as_deref().filter(|n| !n.trim().is_empty()) {
            return name.trim().to_string();
        }
        let joined = format!(
            "{} {}",
            self.location.as_deref().unwrap_or_default(),
            self.nickname.as_deref().unwrap_or_default()
        );
        let joined = joined.trim();
        if joined.is_empty() {
            self.abbrev
                .clone()
                .unwrap_or_else(|| format!("Team {}", self.id))
        } else {
            joined.to_string()
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RosterPayload {
    #[serde(default)]
    pub entries: Vec<RosterEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RosterEntry {
    #[serde(rename = "playerId")]
    pub player_id: u64,
    #[serde(rename = "lineupSlotId", default)]
    pub lineup_slot_id: Option<u8>,
    #[serde(rename = "playerPoolEntry")]
    pub player_pool_entry: PlayerPoolEntry,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerPoolEntry {
    pub player: PlayerInfo,
}

/// Player document shared by roster entries and free-agent results.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerInfo {
    pub id: u64,
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,
    #[serde(rename = "defaultPositionId", default)]
    pub default_position_id: i64,
    #[serde(rename = "proTeamId", default)]
    pub pro_team_id: Option<u32>,
    #[serde(rename = "injuryStatus", default)]
    pub injury_status: Option<String>,
    #[serde(default)]
    pub stats: Vec<StatBlock>,
}

/// One stat split, e.g. id `002026` = season 2026 totals.
///
/// The first two characters of `id` encode the split: `00` full season,
/// `01` last 7 days, `02` last 15, `03` last 30, `10` projections.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatBlock {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "seasonId")]
    pub season_id: u16,
    #[serde(rename = "statSourceId", default)]
    pub stat_source_id: u8,
    #[serde(rename = "statSplitTypeId", default)]
    pub stat_split_type_id: u8,
    #[serde(rename = "averageStats", default)]
    pub average_stats: BTreeMap<String, f64>,
    #[serde(default)]
    pub stats: BTreeMap<String, f64>,
}

/// `players` array returned by `view=kona_player_info`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FreeAgentResponse {
    #[serde(default)]
    pub players: Vec<FreeAgentEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FreeAgentEntry {
    pub player: PlayerInfo,
}
