//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::{LeagueId, Position, Season, TeamId};

/// League selection shared by every command that talks to ESPN.
///
/// Cookies for private leagues are read from `ESPN_S2` and `ESPN_SWID`.
#[derive(Debug, Args)]
pub struct LeagueArgs {
    /// League ID (or set `ESPN_FBB_LEAGUE_ID` env var).
    #[clap(long, short)]
    pub league_id: Option<LeagueId>,

    /// Season year (e.g. 2026).
    #[clap(long, short, default_value_t = Season::default())]
    pub season: Season,
}

#[derive(Debug, Parser)]
#[clap(name = "espn-fbb", about = "ESPN Fantasy Basketball assistant")]
pub struct ESPN {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the JSON API used by the web front end.
    Serve,

    /// Chat with the local assistant about your team.
    ///
    /// The assistant asks for league credentials on the first turn.
    Chat,

    /// List the league's teams by id.
    Teams {
        #[clap(flatten)]
        league: LeagueArgs,
    },

    /// List one team's roster.
    Roster {
        #[clap(flatten)]
        league: LeagueArgs,

        /// ESPN team id, as printed by `teams`.
        #[clap(long, short)]
        team_id: TeamId,
    },

    /// List top free agents by percent owned.
    FreeAgents {
        #[clap(flatten)]
        league: LeagueArgs,

        /// Only players at this position (PG, SG, SF, PF, C).
        #[clap(long, short)]
        position: Option<Position>,

        /// How many players to list.
        #[clap(long, default_value_t = 10)]
        size: usize,
    },

    /// Store season averages for every rostered player and the free-agent pool.
    ///
    /// Creates the statistics table from the first rostered player when it
    /// does not exist yet. Players already stored are left untouched.
    RefreshStats {
        #[clap(flatten)]
        league: LeagueArgs,
    },

    /// Print a stored player's season averages.
    Lookup {
        /// Player name; falls back to case-insensitive and partial matches.
        name: String,

        /// Output the row as JSON.
        #[clap(long)]
        json: bool,
    },

    /// Print the league's weighted scoring categories.
    Categories {
        #[clap(flatten)]
        league: LeagueArgs,
    },
}
