//! Data models for the storage layer

use serde::{ser::SerializeMap, Serialize, Serializer};

use super::schema::NAME_COLUMN;

/// One stored player: the name plus every category column in table order.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStatRow {
    pub name: String,
    pub stats: Vec<(String, Option<f64>)>,
}

impl PlayerStatRow {
    pub fn get(&self, category: &str) -> Option<f64> {
        self.stats
            .iter()
            .find(|(name, _)| name == category)
            .and_then(|(_, v)| *v)
    }
}

/// Serialized as a flat `{"NAME": ..., "<category>": value}` object.
impl Serialize for PlayerStatRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.stats.len() + 1))?;
        map.serialize_entry(NAME_COLUMN, &self.name)?;
        for (category, value) in &self.stats {
            map.serialize_entry(category, value)?;
        }
        map.end()
    }
}

/// Outcome of `ensure_schema`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaStatus {
    /// Table created with these category columns (the name column excluded).
    Created { columns: Vec<String> },
    AlreadyExists,
}

/// Where a refreshed player came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlayerSource {
    Roster,
    FreeAgent,
}

/// A player that could not be stored during a refresh.
#[derive(Debug, Clone, Serialize)]
pub struct RowFailure {
    pub name: String,
    pub source: PlayerSource,
    pub reason: String,
}

/// Summary of one refresh pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RefreshReport {
    pub inserted: Vec<String>,
    /// Players already stored (or seen earlier in the same pass).
    pub skipped: usize,
    pub failures: Vec<RowFailure>,
}
