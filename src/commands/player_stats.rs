//! Statistics store commands: refresh, lookup and scoring categories

use tracing::{debug, info};

use crate::{
    espn::{category_weights, LeagueCredentials, LeagueSource},
    storage::{PlayerStatRow, RefreshReport, SchemaStatus},
    FbbError, Result, StatsStore,
};

/// How many stored names a lookup miss shows.
const MISS_SAMPLE: usize = 5;

/// Fetch the league and free-agent pool, create the table from the sample
/// player if needed, then insert every player not yet stored.
pub async fn refresh_stats(
    source: &dyn LeagueSource,
    store: &StatsStore,
    creds: &LeagueCredentials,
    free_agent_pool: usize,
) -> Result<RefreshReport> {
    let league = source.fetch_league(creds).await?;
    let sample = league
        .sample_player()
        .and_then(|p| p.season_averages(league.season))
        .ok_or(FbbError::NoData)?;

    if store.ensure_schema(sample)? == SchemaStatus::AlreadyExists {
        debug!("player stats table already exists");
    }

    let free_agents = source.free_agents(creds, None, free_agent_pool).await?;
    info!(
        rostered = league.rostered_players().count(),
        free_agents = free_agents.len(),
        "refreshing player stats"
    );
    store.refresh(&league, &free_agents)
}

/// Handle the refresh-stats command
pub async fn handle_refresh_stats(
    source: &dyn LeagueSource,
    store: &StatsStore,
    creds: &LeagueCredentials,
    free_agent_pool: usize,
) -> Result<()> {
    let report = refresh_stats(source, store, creds, free_agent_pool).await?;

    println!(
        "Inserted {} players, skipped {} already stored, {} failed",
        report.inserted.len(),
        report.skipped,
        report.failures.len()
    );
    for failure in &report.failures {
        println!("  ✗ {} ({:?}): {}", failure.name, failure.source, failure.reason);
    }
    println!("{} players in {}", store.count()?, store.path().display());
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(PlayerStatRow),
    /// A few stored names to help diagnose the miss.
    NotFound { sample: Vec<String> },
}

pub fn lookup_player(store: &StatsStore, name: &str) -> Result<LookupOutcome> {
    match store.lookup(name)? {
        Some(row) => Ok(LookupOutcome::Found(row)),
        None => {
            let sample = store.sample_names(MISS_SAMPLE)?;
            debug!(query = name, ?sample, "player not found in stats table");
            Ok(LookupOutcome::NotFound { sample })
        }
    }
}

/// Handle the lookup command
pub fn handle_lookup(store: &StatsStore, name: &str, as_json: bool) -> Result<()> {
    match lookup_player(store, name)? {
        LookupOutcome::Found(row) if as_json => println!("{}", serde_json::to_string_pretty(&row)?),
        LookupOutcome::Found(row) => {
            println!("{}", row.name);
            for (category, value) in &row.stats {
                match value {
                    Some(v) => println!("  {:<6} {:>8.3}", category, v),
                    None => println!("  {:<6} {:>8}", category, "-"),
                }
            }
        }
        LookupOutcome::NotFound { sample } => {
            println!("{}", FbbError::PlayerNotFound { name: name.to_string() });
            if !sample.is_empty() {
                println!("Sample of stored players: {}", sample.join(", "));
            }
        }
    }
    Ok(())
}

/// Handle the categories command
pub async fn handle_categories(source: &dyn LeagueSource, creds: &LeagueCredentials) -> Result<()> {
    let league = source.fetch_league(creds).await?;
    let categories = category_weights(&league)?;

    println!("{} scoring categories", categories.len());
    for (stat_id, name) in &categories {
        println!("{:>4}: {}", stat_id, name);
    }
    Ok(())
}
