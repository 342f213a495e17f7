//! ESPN API filter utilities for the free-agent query.
//!
//! ESPN reads player-pool filters from the `x-fantasy-filter` header as a
//! JSON document wrapped in a top-level `players` object. Each filter value is
//! wrapped in `{"value": ...}`.

use crate::{cli::types::Position, Result};
use reqwest::header::HeaderValue;
use serde::Serialize;

/// Wrapper for ESPN-style filter values.
///
/// For example: `{"filterStatus": {"value": ["FREEAGENT", "WAIVERS"]}}`
#[derive(Debug, Serialize)]
pub struct Val<T> {
    pub value: T,
}

/// Sort directive; lower `sortPriority` sorts first.
#[derive(Debug, Serialize)]
pub struct Sort {
    #[serde(rename = "sortPriority")]
    pub sort_priority: u16,
    #[serde(rename = "sortAsc")]
    pub sort_asc: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Player-pool filter for free agents.
///
/// ```rust
/// use espn_fbb::{core::filters::{FreeAgentFilter, IntoHeaderValue}, Position};
///
/// let filter = FreeAgentFilter::new(Some(Position::C), 10);
/// let header_value = filter.to_header_value().unwrap();
/// assert!(header_value.to_str().unwrap().contains("FREEAGENT"));
/// ```
#[derive(Debug, Serialize)]
pub struct FreeAgentFilter {
    pub players: PlayersFilter,
}

#[derive(Debug, Serialize)]
pub struct PlayersFilter {
    #[serde(rename = "filterStatus")]
    pub filter_status: Val<Vec<&'static str>>,

    #[serde(rename = "filterSlotIds", skip_serializing_if = "Option::is_none")]
    pub filter_slot_ids: Option<Val<Vec<u8>>>,

    pub limit: usize,

    #[serde(rename = "sortPercOwned")]
    pub sort_perc_owned: Sort,

    #[serde(rename = "sortDraftRanks")]
    pub sort_draft_ranks: Sort,
}

impl FreeAgentFilter {
    /// Free agents and waiver players, most owned first, optionally limited
    /// to one position's slot.
    pub fn new(position: Option<Position>, limit: usize) -> Self {
        Self {
            players: PlayersFilter {
                filter_status: Val {
                    value: vec!["FREEAGENT", "WAIVERS"],
                },
                filter_slot_ids: position.map(|p| Val {
                    value: vec![p.slot_id()],
                }),
                limit,
                sort_perc_owned: Sort {
                    sort_priority: 1,
                    sort_asc: false,
                    value: None,
                },
                sort_draft_ranks: Sort {
                    sort_priority: 100,
                    sort_asc: true,
                    value: Some("STANDARD".to_string()),
                },
            },
        }
    }
}

/// General-purpose helper: any Serialize → JSON → HeaderValue
pub trait IntoHeaderValue {
    fn to_header_value(&self) -> Result<HeaderValue>;
}

impl<T> IntoHeaderValue for T
where
    T: Serialize,
{
    fn to_header_value(&self) -> Result<HeaderValue> {
        let s = serde_json::to_string(self)?;
        Ok(HeaderValue::from_str(&s)?)
    }
}
