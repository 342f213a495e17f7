//! Unit tests for storage functionality

use super::*;
use crate::espn::{League, Player, StatLine, Team};
use crate::{FbbError, LeagueId, Season};
use tempfile::TempDir;

const SEASON: Season = Season(2026);

fn create_test_store() -> (TempDir, StatsStore) {
    let dir = TempDir::new().unwrap();
    let store = StatsStore::new(dir.path().join("player_data").join("stats.db"));
    (dir, store)
}

fn stat_line(pts: f64) -> StatLine {
    vec![("PTS", pts), ("AST", 4.0), ("FG%", 0.475), ("3PM", 1.5)]
        .into_iter()
        .collect()
}

fn player(id: u64, name: &str, pts: f64) -> Player {
    Player::new(id, name).with_season_averages(SEASON, stat_line(pts))
}

fn league(rosters: Vec<Vec<Player>>) -> League {
    let teams = rosters
        .into_iter()
        .enumerate()
        .map(|(i, roster)| Team::new(i as u32 + 1, format!("Team {}", i + 1), roster))
        .collect();
    League::new(LeagueId::new(1), SEASON, teams)
}

#[test]
fn test_ensure_schema_creates_one_column_per_category() {
    let (_dir, store) = create_test_store();

    let status = store.ensure_schema(&stat_line(10.0)).unwrap();
    assert_eq!(
        status,
        SchemaStatus::Created {
            columns: vec!["PTS".into(), "AST".into(), "FG%".into(), "3PM".into()]
        }
    );
    assert_eq!(store.columns().unwrap(), vec!["PTS", "AST", "FG%", "3PM"]);
    assert!(store.path().exists());
}

#[test]
fn test_ensure_schema_is_idempotent() {
    let (_dir, store) = create_test_store();

    store.ensure_schema(&stat_line(10.0)).unwrap();
    let second = store.ensure_schema(&stat_line(11.0)).unwrap();

    assert_eq!(second, SchemaStatus::AlreadyExists);
    assert_eq!(store.columns().unwrap().len(), 4);
}

#[test]
fn test_ensure_schema_rejects_unquotable_names() {
    let (_dir, store) = create_test_store();

    let bad: StatLine = vec![("PTS", 1.0), ("odd]name", 2.0)].into_iter().collect();
    let err = store.ensure_schema(&bad).unwrap_err();

    assert!(matches!(err, FbbError::InvalidCategory { ref name } if name == "odd]name"));
    assert!(!store.table_exists().unwrap());
}

#[test]
fn test_ensure_schema_rejects_case_insensitive_duplicates() {
    let (_dir, store) = create_test_store();

    let dup: StatLine = vec![("PTS", 1.0), ("pts", 2.0)].into_iter().collect();
    assert!(matches!(
        store.ensure_schema(&dup),
        Err(FbbError::InvalidCategory { .. })
    ));

    let shadow: StatLine = vec![("name", 1.0)].into_iter().collect();
    assert!(matches!(
        store.ensure_schema(&shadow),
        Err(FbbError::InvalidCategory { .. })
    ));
}

#[test]
fn test_ensure_schema_requires_categories() {
    let (_dir, store) = create_test_store();
    assert!(matches!(
        store.ensure_schema(&StatLine::new()),
        Err(FbbError::NoData)
    ));
}

#[test]
fn test_quote_identifier() {
    assert_eq!(quote_identifier("FG%").unwrap(), "[FG%]");
    assert_eq!(quote_identifier("A/TO").unwrap(), "[A/TO]");
    assert!(quote_identifier("").is_err());
    assert!(quote_identifier("  ").is_err());
    assert!(quote_identifier("a\nb").is_err());
}

#[test]
fn test_refresh_without_schema_fails() {
    let (_dir, store) = create_test_store();
    let err = store.refresh(&league(vec![vec![]]), &[]).unwrap_err();
    assert!(matches!(err, FbbError::SchemaMissing));
}

#[test]
fn test_refresh_inserts_roster_then_free_agents() {
    let (_dir, store) = create_test_store();
    store.ensure_schema(&stat_line(0.0)).unwrap();

    let lg = league(vec![
        vec![player(1, "Alpha", 20.0)],
        vec![player(2, "Beta", 15.0)],
    ]);
    let fas = vec![player(3, "Gamma", 8.0)];

    let report = store.refresh(&lg, &fas).unwrap();

    assert_eq!(report.inserted, vec!["Alpha", "Beta", "Gamma"]);
    assert_eq!(report.skipped, 0);
    assert!(report.failures.is_empty());
    assert_eq!(store.player_names().unwrap(), vec!["Alpha", "Beta", "Gamma"]);
}

#[test]
fn test_refresh_never_modifies_existing_rows() {
    let (_dir, store) = create_test_store();
    store.ensure_schema(&stat_line(0.0)).unwrap();
    store
        .refresh(&league(vec![vec![player(1, "Alpha", 20.0)]]), &[])
        .unwrap();

    let report = store
        .refresh(&league(vec![vec![player(1, "Alpha", 99.0)]]), &[])
        .unwrap();

    assert!(report.inserted.is_empty());
    assert_eq!(report.skipped, 1);
    assert_eq!(store.lookup("Alpha").unwrap().unwrap().get("PTS"), Some(20.0));
}

#[test]
fn test_refresh_skips_duplicates_within_one_pass() {
    let (_dir, store) = create_test_store();
    store.ensure_schema(&stat_line(0.0)).unwrap();

    let lg = league(vec![vec![player(1, "Alpha", 20.0)]]);
    let fas = vec![player(1, "Alpha", 21.0), player(2, "Beta", 3.0)];

    let report = store.refresh(&lg, &fas).unwrap();

    assert_eq!(report.inserted, vec!["Alpha", "Beta"]);
    assert_eq!(report.skipped, 1);
    assert_eq!(store.count().unwrap(), 2);
}

#[test]
fn test_refresh_logs_and_skips_bad_rows() {
    let (_dir, store) = create_test_store();
    store.ensure_schema(&stat_line(0.0)).unwrap();

    let no_stats = Player::new(5, "No Stats");
    let extra: StatLine = vec![("PTS", 1.0), ("DD", 1.0)].into_iter().collect();
    let unknown_category = Player::new(6, "Extra").with_season_averages(SEASON, extra);

    let lg = league(vec![vec![no_stats, player(1, "Alpha", 20.0)]]);
    let report = store.refresh(&lg, &[unknown_category]).unwrap();

    assert_eq!(report.inserted, vec!["Alpha"]);
    assert_eq!(report.failures.len(), 2);
    assert_eq!(report.failures[0].name, "No Stats");
    assert_eq!(report.failures[0].source, PlayerSource::Roster);
    assert_eq!(report.failures[1].name, "Extra");
    assert_eq!(report.failures[1].source, PlayerSource::FreeAgent);
    assert!(report.failures[1].reason.contains("DD"));
    assert_eq!(store.count().unwrap(), 1);
}

#[test]
fn test_refresh_accepts_subset_of_columns() {
    let (_dir, store) = create_test_store();
    store.ensure_schema(&stat_line(0.0)).unwrap();

    let partial: StatLine = vec![("PTS", 7.0)].into_iter().collect();
    let lg = league(vec![vec![
        Player::new(1, "Partial").with_season_averages(SEASON, partial),
    ]]);
    store.refresh(&lg, &[]).unwrap();

    let row = store.lookup("Partial").unwrap().unwrap();
    assert_eq!(row.get("PTS"), Some(7.0));
    assert_eq!(row.get("AST"), None);
}

#[test]
fn test_lookup_tiers() {
    let (_dir, store) = create_test_store();
    store.ensure_schema(&stat_line(0.0)).unwrap();
    let lg = league(vec![vec![
        player(1, "LeBron James", 25.0),
        player(2, "Nikola Jokić", 27.0),
        player(3, "James Harden", 18.0),
    ]]);
    store.refresh(&lg, &[]).unwrap();

    assert_eq!(store.lookup("LeBron James").unwrap().unwrap().name, "LeBron James");
    assert_eq!(store.lookup("lebron james").unwrap().unwrap().name, "LeBron James");
    assert_eq!(store.lookup("JOKIĆ").unwrap().unwrap().name, "Nikola Jokić");
    assert_eq!(store.lookup("harden").unwrap().unwrap().name, "James Harden");
    // Substring hits return the first stored match
    assert_eq!(store.lookup("james").unwrap().unwrap().name, "LeBron James");
    assert!(store.lookup("Wembanyama").unwrap().is_none());
    assert!(store.lookup("   ").unwrap().is_none());
}

#[test]
fn test_lookup_prefers_exact_over_case_insensitive() {
    let (_dir, store) = create_test_store();
    store.ensure_schema(&stat_line(0.0)).unwrap();
    let lg = league(vec![vec![player(1, "AJ Green", 5.0), player(2, "aj green", 6.0)]]);
    store.refresh(&lg, &[]).unwrap();

    assert_eq!(store.lookup("aj green").unwrap().unwrap().get("PTS"), Some(6.0));
    assert_eq!(store.lookup("Aj Green").unwrap().unwrap().get("PTS"), Some(5.0));
}

#[test]
fn test_lookup_row_keeps_column_order() {
    let (_dir, store) = create_test_store();
    store.ensure_schema(&stat_line(0.0)).unwrap();
    store
        .refresh(&league(vec![vec![player(1, "Alpha", 20.0)]]), &[])
        .unwrap();

    let row = store.lookup("Alpha").unwrap().unwrap();
    let keys: Vec<&str> = row.stats.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["PTS", "AST", "FG%", "3PM"]);

    let json = serde_json::to_string(&row).unwrap();
    assert!(json.starts_with(r#"{"NAME":"Alpha","PTS":20.0"#));
}

#[test]
fn test_empty_store_diagnostics() {
    let (_dir, store) = create_test_store();

    assert_eq!(store.count().unwrap(), 0);
    assert!(store.player_names().unwrap().is_empty());
    assert!(store.sample_names(5).unwrap().is_empty());
    assert!(store.lookup("anyone").unwrap().is_none());
    assert!(matches!(store.columns(), Err(FbbError::SchemaMissing)));
}

#[test]
fn test_sample_names_limit() {
    let (_dir, store) = create_test_store();
    store.ensure_schema(&stat_line(0.0)).unwrap();
    let roster = (0..8).map(|i| player(i, &format!("P{}", i), 1.0)).collect();
    store.refresh(&league(vec![roster]), &[]).unwrap();

    assert_eq!(store.sample_names(3).unwrap(), vec!["P0", "P1", "P2"]);
}
