//! Runtime configuration resolved from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::{FbbError, Result};

pub const DB_PATH_ENV_VAR: &str = "FBB_DB_PATH";
pub const BIND_ADDR_ENV_VAR: &str = "FBB_BIND_ADDR";
pub const ALLOWED_ORIGINS_ENV_VAR: &str = "FBB_ALLOWED_ORIGINS";
pub const OLLAMA_HOST_ENV_VAR: &str = "OLLAMA_HOST";
pub const MODEL_ENV_VAR: &str = "FBB_MODEL";
pub const FREE_AGENT_POOL_ENV_VAR: &str = "FBB_FREE_AGENT_POOL";
pub const LEAGUE_FILE_ENV_VAR: &str = "FBB_LEAGUE_FILE";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
const DEFAULT_ORIGINS: &str = "http://localhost:3000,http://localhost:3001";
const DEFAULT_OLLAMA_HOST: &str = "http://localhost:11434";
const DEFAULT_MODEL: &str = "llama3.1";
const DEFAULT_FREE_AGENT_POOL: usize = 2000;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub db_path: PathBuf,
    pub bind_addr: SocketAddr,
    pub allowed_origins: Vec<String>,
    pub ollama_host: String,
    pub model: String,
    /// How many free agents a stats refresh scans.
    pub free_agent_pool: usize,
    /// Where the assistant remembers the league chosen in the last chat.
    pub league_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let db_path = get(DB_PATH_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(default_db_path);

        let league_file = get(LEAGUE_FILE_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(default_league_file);

        let bind_raw = get(BIND_ADDR_ENV_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw.trim().parse().map_err(|_| {
            FbbError::validation(format!("{} is not a socket address: {}", BIND_ADDR_ENV_VAR, bind_raw))
        })?;

        let allowed_origins = get(ALLOWED_ORIGINS_ENV_VAR)
            .unwrap_or_else(|| DEFAULT_ORIGINS.to_string())
            .split(',')
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();

        let free_agent_pool = match get(FREE_AGENT_POOL_ENV_VAR) {
            Some(v) => v.trim().parse()?,
            None => DEFAULT_FREE_AGENT_POOL,
        };

        Ok(Self {
            db_path,
            bind_addr,
            allowed_origins,
            ollama_host: get(OLLAMA_HOST_ENV_VAR)
                .unwrap_or_else(|| DEFAULT_OLLAMA_HOST.to_string()),
            model: get(MODEL_ENV_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            free_agent_pool,
            league_file,
        })
    }
}

fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("espn-fbb")
}

/// `<data dir>/espn-fbb/espn_league_info.db`, falling back to the working directory.
pub fn default_db_path() -> PathBuf {
    data_dir().join("espn_league_info.db")
}

/// `<data dir>/espn-fbb/league_info.json`, next to the statistics database.
pub fn default_league_file() -> PathBuf {
    data_dir().join("league_info.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:5000".parse().unwrap());
        assert_eq!(
            config.allowed_origins,
            vec!["http://localhost:3000", "http://localhost:3001"]
        );
        assert_eq!(config.ollama_host, "http://localhost:11434");
        assert_eq!(config.model, "llama3.1");
        assert_eq!(config.free_agent_pool, 2000);
        assert!(config.db_path.ends_with("espn-fbb/espn_league_info.db"));
        assert!(config.league_file.ends_with("espn-fbb/league_info.json"));
        assert_eq!(config.league_file.parent(), config.db_path.parent());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            (DB_PATH_ENV_VAR, "/tmp/stats.db"),
            (BIND_ADDR_ENV_VAR, "0.0.0.0:8080"),
            (ALLOWED_ORIGINS_ENV_VAR, "http://a.test, ,http://b.test"),
            (MODEL_ENV_VAR, "gemma3"),
            (FREE_AGENT_POOL_ENV_VAR, "500"),
            (LEAGUE_FILE_ENV_VAR, "/tmp/league.json"),
        ])
        .unwrap();

        assert_eq!(config.db_path, PathBuf::from("/tmp/stats.db"));
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.allowed_origins, vec!["http://a.test", "http://b.test"]);
        assert_eq!(config.model, "gemma3");
        assert_eq!(config.free_agent_pool, 500);
        assert_eq!(config.league_file, PathBuf::from("/tmp/league.json"));
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = config_from(&[(MODEL_ENV_VAR, "  ")]).unwrap();
        assert_eq!(config.model, "llama3.1");
    }

    #[test]
    fn test_invalid_values() {
        assert!(config_from(&[(BIND_ADDR_ENV_VAR, "not-an-addr")]).is_err());
        assert!(matches!(
            config_from(&[(FREE_AGENT_POOL_ENV_VAR, "many")]),
            Err(FbbError::InvalidNumber(_))
        ));
    }
}
