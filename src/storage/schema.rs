//! Database schema and connection management

use crate::{espn::StatLine, FbbError, Result};
use rusqlite::Connection;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::info;

use super::models::SchemaStatus;

pub const STATS_TABLE: &str = "player_stats";
pub const NAME_COLUMN: &str = "NAME";

/// Player statistics cache backed by one SQLite file.
///
/// Every operation opens its own connection and drops it when done; nothing
/// spans calls.
#[derive(Debug, Clone)]
pub struct StatsStore {
    path: PathBuf,
}

impl StatsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a connection, creating the parent directory on first use.
    pub(crate) fn connect(&self) -> Result<Connection> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(Connection::open(&self.path)?)
    }

    pub fn table_exists(&self) -> Result<bool> {
        table_exists(&self.connect()?)
    }

    /// Category columns in table order, without the name column.
    pub fn columns(&self) -> Result<Vec<String>> {
        let conn = self.connect()?;
        if !table_exists(&conn)? {
            return Err(FbbError::SchemaMissing);
        }
        category_columns(&conn)
    }

    /// Create the statistics table from a sample player's season averages
    /// unless it already exists. Category names are checked before any DDL.
    pub fn ensure_schema(&self, sample: &StatLine) -> Result<SchemaStatus> {
        let conn = self.connect()?;
        if table_exists(&conn)? {
            return Ok(SchemaStatus::AlreadyExists);
        }
        if sample.is_empty() {
            return Err(FbbError::NoData);
        }

        let columns: Vec<String> = sample.keys().map(str::to_string).collect();
        validate_categories(&columns)?;

        let mut defs = vec![format!("{} TEXT NOT NULL", quote_identifier(NAME_COLUMN)?)];
        for column in &columns {
            defs.push(format!("{} REAL", quote_identifier(column)?));
        }
        conn.execute(
            &format!("CREATE TABLE IF NOT EXISTS {} ({})", STATS_TABLE, defs.join(", ")),
            [],
        )?;

        info!(columns = columns.len(), path = %self.path.display(), "created player stats table");
        Ok(SchemaStatus::Created { columns })
    }
}

/// Bracket-quote an identifier. Names that cannot be bracket-quoted are
/// rejected.
pub fn quote_identifier(name: &str) -> Result<String> {
    if name.trim().is_empty() || name.contains(']') || name.chars().any(char::is_control) {
        return Err(FbbError::InvalidCategory {
            name: name.to_string(),
        });
    }
    Ok(format!("[{}]", name))
}

/// SQLite column names are case-insensitive, so categories must be unique
/// ignoring case and must not shadow the name column.
fn validate_categories(columns: &[String]) -> Result<()> {
    let mut seen = HashSet::new();
    seen.insert(NAME_COLUMN.to_lowercase());
    for column in columns {
        quote_identifier(column)?;
        if !seen.insert(column.to_lowercase()) {
            return Err(FbbError::InvalidCategory {
                name: column.clone(),
            });
        }
    }
    Ok(())
}

pub(crate) fn table_exists(conn: &Connection) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
        [STATS_TABLE],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

pub(crate) fn category_columns(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", STATS_TABLE))?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(1))?;

    let mut columns = Vec::new();
    for row in rows {
        let name = row?;
        if name != NAME_COLUMN {
            columns.push(name);
        }
    }
    Ok(columns)
}
