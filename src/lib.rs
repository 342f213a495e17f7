//! ESPN Fantasy Basketball Assistant Library
//!
//! Fetches league, roster and free-agent data from ESPN's fantasy basketball
//! API, caches per-player season averages in a local SQLite table, and drives
//! a local language model that helps with team decisions.
//!
//! ## Features
//!
//! - **League Access**: Teams, rosters and free agents through a thin ESPN adapter
//! - **Statistics Store**: Schema discovered from live data, incremental refresh, fuzzy lookup
//! - **Scoring Categories**: Weighted category map derived from league settings
//! - **Active Session**: One process-wide selected league behind a mutex
//! - **HTTP Facade**: JSON endpoints used by the web front end
//! - **Assistant**: Ollama chat loop with a single league-info tool
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use espn_fbb::{espn::{EspnClient, LeagueCredentials, LeagueSource}, LeagueId, Season};
//!
//! # async fn example() -> espn_fbb::Result<()> {
//! let creds = LeagueCredentials::new(LeagueId::new(123456), Season::new(2026), "s2", "{SWID}");
//! let league = EspnClient::new().fetch_league(&creds).await?;
//! for team in &league.teams {
//!     println!("{}: {} players", team.name, team.roster.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export ESPN_FBB_LEAGUE_ID=123456
//! export ESPN_S2=...
//! export ESPN_SWID={...}
//! ```

pub mod api;
pub mod assistant;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod espn;
pub mod session;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{LeagueId, PlayerId, Position, Season, TeamId};
pub use config::Config;
pub use error::{FbbError, Result};
pub use session::{Session, SessionSlot};
pub use storage::StatsStore;

pub const LEAGUE_ID_ENV_VAR: &str = "ESPN_FBB_LEAGUE_ID";
pub const ESPN_S2_ENV_VAR: &str = "ESPN_S2";
pub const ESPN_SWID_ENV_VAR: &str = "ESPN_SWID";
