use std::collections::BTreeMap;
use tracing::warn;

use super::{league::League, types::ScoringItem};
use crate::{FbbError, Result};


/// Scoring stat id → category name, limited to categories that carry weight.
pub type CategoryMap = BTreeMap<u16, String>;

/// Match weighted scoring items to category names by position: the i-th
/// scoring item names the same category as the i-th sample key.
pub fn weighted_categories<'a, K>(items: &[ScoringItem], sample_keys: K) -> CategoryMap
where
    K: IntoIterator<Item = &'a str>,
{
    let keys: Vec<&str> = sample_keys.into_iter().collect();
    let mut map = CategoryMap::new();

    for (idx, item) in items.iter().enumerate() {
        if item.points == 0.0 {
            continue;
        }
        match keys.get(idx) {
            Some(name) => {
                map.insert(item.stat_id, name.to_string());
            }
            None => warn!(
                stat_id = item.stat_id,
                position = idx,
                sample_len = keys.len(),
                "weighted category has no sample counterpart"
            ),
        }
    }
    map
}

/// Category map for a league, using its scoring settings and the same
/// sample player that defines the statistics schema.
pub fn category_weights(league: &League) -> Result<CategoryMap> {
    let sample = league.sample_player().ok_or(FbbError::NoData)?;
    let averages = sample
        .season_averages(league.season)
        .ok_or(FbbError::NoData)?;

    Ok(weighted_categories(
        &league.settings.scoring_settings.scoring_items,
        averages.keys(),
    ))
}
