//! The league picked in a previous chat, kept on disk as JSON.

use serde::{Deserialize, Serialize};
use std::{fs, io::ErrorKind, path::Path};
use tracing::{debug, info};

use super::tools::LeagueSelection;
use crate::{espn::LeagueCredentials, LeagueId, Result, Season, TeamId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct SavedLeague {
    league_id: LeagueId,
    year: Season,
    espn_s2: String,
    swid: String,
    user_team_id: TeamId,
}

impl From<&LeagueSelection> for SavedLeague {
    fn from(selection: &LeagueSelection) -> Self {
        let creds = &selection.credentials;
        Self {
            league_id: creds.league_id,
            year: creds.season,
            espn_s2: creds.espn_s2.clone(),
            swid: creds.swid.clone(),
            user_team_id: selection.team_id,
        }
    }
}

impl From<SavedLeague> for LeagueSelection {
    fn from(saved: SavedLeague) -> Self {
        Self {
            credentials: LeagueCredentials::new(saved.league_id, saved.year, saved.espn_s2, saved.swid),
            team_id: saved.user_team_id,
        }
    }
}

/// Write the selection, creating parent directories as needed.
pub fn save_selection(path: &Path, selection: &LeagueSelection) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(&SavedLeague::from(selection))?;
    fs::write(path, json)?;
    info!(path = %path.display(), "saved league selection");
    Ok(())
}

/// The saved selection, or `None` when nothing has been saved yet.
pub fn load_selection(path: &Path) -> Result<Option<LeagueSelection>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no saved league selection");
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };
    let saved: SavedLeague = serde_json::from_str(&raw)?;
    Ok(Some(saved.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::TempDir;

    fn selection() -> LeagueSelection {
        LeagueSelection {
            credentials: LeagueCredentials::new(LeagueId::new(12345), Season::new(2026), "s2", "{SWID}"),
            team_id: TeamId::new(4),
        }
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("espn-fbb").join("league_info.json");

        assert_eq!(load_selection(&path).unwrap(), None);

        save_selection(&path, &selection()).unwrap();
        assert_eq!(load_selection(&path).unwrap(), Some(selection()));
    }

    #[test]
    fn test_file_layout() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("league_info.json");
        save_selection(&path, &selection()).unwrap();

        let json: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "league_id": 12345,
                "year": 2026,
                "espn_s2": "s2",
                "swid": "{SWID}",
                "user_team_id": 4
            })
        );
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("league_info.json");
        fs::write(&path, "{not json").unwrap();

        assert!(load_selection(&path).is_err());
    }
}
