//! Refresh and lookup operations on the statistics table

use super::{
    models::*,
    schema::{category_columns, table_exists, StatsStore, NAME_COLUMN, STATS_TABLE},
};
use crate::{
    espn::{League, Player},
    FbbError, Result, Season,
};
use rusqlite::{types::ValueRef, Connection, OptionalExtension, Transaction};
use std::collections::HashSet;
use tracing::{debug, info, warn};

impl StatsStore {
    /// Number of stored players; zero when the table does not exist yet.
    pub fn count(&self) -> Result<usize> {
        let conn = self.connect()?;
        if !table_exists(&conn)? {
            return Ok(0);
        }
        let n: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM {}", STATS_TABLE), [], |row| {
            row.get(0)
        })?;
        Ok(n as usize)
    }

    /// Stored player names in insertion order.
    pub fn player_names(&self) -> Result<Vec<String>> {
        let conn = self.connect()?;
        if !table_exists(&conn)? {
            return Ok(Vec::new());
        }
        stored_names(&conn, None)
    }

    /// A few stored names, used to help diagnose lookup misses.
    pub fn sample_names(&self, limit: usize) -> Result<Vec<String>> {
        let conn = self.connect()?;
        if !table_exists(&conn)? {
            return Ok(Vec::new());
        }
        stored_names(&conn, Some(limit))
    }

    /// Insert every rostered player and every given free agent that is not
    /// already stored. Existing rows are never modified.
    ///
    /// Names are matched exactly against rows present when the pass starts
    /// and against rows inserted earlier in the same pass. A player that
    /// cannot be stored is logged and recorded in the report; the rest of the
    /// batch is still committed.
    pub fn refresh(&self, league: &League, free_agents: &[Player]) -> Result<RefreshReport> {
        let mut conn = self.connect()?;
        if !table_exists(&conn)? {
            return Err(FbbError::SchemaMissing);
        }

        let columns: HashSet<String> = category_columns(&conn)?.into_iter().collect();
        let mut seen: HashSet<String> = stored_names(&conn, None)?.into_iter().collect();
        let mut report = RefreshReport::default();

        let candidates = league
            .rostered_players()
            .map(|p| (PlayerSource::Roster, p))
            .chain(free_agents.iter().map(|p| (PlayerSource::FreeAgent, p)));

        let tx = conn.transaction()?;
        for (source, player) in candidates {
            if seen.contains(&player.name) {
                report.skipped += 1;
                continue;
            }

            match insert_player(&tx, player, league.season, &columns) {
                Ok(()) => {
                    seen.insert(player.name.clone());
                    report.inserted.push(player.name.clone());
                }
                Err(e) => {
                    warn!(player = %player.name, ?source, error = %e, "failed to store player stats");
                    report.failures.push(RowFailure {
                        name: player.name.clone(),
                        source,
                        reason: e.to_string(),
                    });
                }
            }
        }
        tx.commit()?;

        info!(
            inserted = report.inserted.len(),
            skipped = report.skipped,
            failed = report.failures.len(),
            "player stats refresh complete"
        );
        Ok(report)
    }

    /// Find a player by exact name, then case-insensitive name, then
    /// case-insensitive substring. Returns the first match in insertion order.
    pub fn lookup(&self, name: &str) -> Result<Option<PlayerStatRow>> {
        let conn = self.connect()?;
        if !table_exists(&conn)? {
            return Ok(None);
        }

        if let Some(row) = row_by_name(&conn, name)? {
            return Ok(Some(row));
        }

        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(None);
        }

        let names = stored_names(&conn, None)?;
        let lowered: Vec<String> = names.iter().map(|n| n.to_lowercase()).collect();
        let matched = lowered
            .iter()
            .position(|n| *n == needle)
            .or_else(|| lowered.iter().position(|n| n.contains(&needle)));

        match matched {
            Some(idx) => {
                debug!(query = name, matched = %names[idx], "fuzzy player match");
                row_by_name(&conn, &names[idx])
            }
            None => Ok(None),
        }
    }
}

fn insert_player(
    tx: &Transaction<'_>,
    player: &Player,
    season: Season,
    columns: &HashSet<String>,
) -> Result<()> {
    let averages = player
        .season_averages(season)
        .ok_or_else(|| FbbError::MissingAverages {
            name: player.name.clone(),
        })?;

    let mut column_list = vec![format!("[{}]", NAME_COLUMN)];
    let mut params: Vec<Box<dyn rusqlite::ToSql>> = vec![Box::new(player.name.clone())];

    // Columns were validated when the table was created; only those are used.
    for (category, value) in averages.iter() {
        if !columns.contains(category) {
            return Err(FbbError::UnknownCategory {
                name: category.to_string(),
            });
        }
        column_list.push(format!("[{}]", category));
        params.push(Box::new(value));
    }

    let placeholders = vec!["?"; params.len()].join(", ");
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        STATS_TABLE,
        column_list.join(", "),
        placeholders
    );
    tx.execute(
        &sql,
        rusqlite::params_from_iter(params.iter().map(|p| p.as_ref())),
    )?;
    Ok(())
}

fn stored_names(conn: &Connection, limit: Option<usize>) -> Result<Vec<String>> {
    let mut query = format!("SELECT [{}] FROM {} ORDER BY rowid", NAME_COLUMN, STATS_TABLE);
    if let Some(l) = limit {
        query.push_str(&format!(" LIMIT {}", l));
    }

    let mut stmt = conn.prepare(&query)?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut names = Vec::new();
    for row in rows {
        names.push(row?);
    }
    Ok(names)
}

fn row_by_name(conn: &Connection, name: &str) -> Result<Option<PlayerStatRow>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT * FROM {} WHERE [{}] = ?1 ORDER BY rowid LIMIT 1",
        STATS_TABLE, NAME_COLUMN
    ))?;
    let column_names: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();

    let row = stmt
        .query_row([name], |row| {
            let mut stored_name = String::new();
            let mut stats = Vec::with_capacity(column_names.len().saturating_sub(1));
            for (idx, column) in column_names.iter().enumerate() {
                if column == NAME_COLUMN {
                    stored_name = row.get(idx)?;
                    continue;
                }
                let value = match row.get_ref(idx)? {
                    ValueRef::Real(v) => Some(v),
                    ValueRef::Integer(v) => Some(v as f64),
                    ValueRef::Text(t) => std::str::from_utf8(t).ok().and_then(|s| s.parse().ok()),
                    ValueRef::Null | ValueRef::Blob(_) => None,
                };
                stats.push((column.clone(), value));
            }
            Ok(PlayerStatRow {
                name: stored_name,
                stats,
            })
        })
        .optional()?;
    Ok(row)
}
