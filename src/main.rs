//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use espn_fbb::{
    cli::{Commands, LeagueArgs, ESPN},
    commands::{
        chat::handle_chat,
        league_data::{handle_free_agents, handle_roster, handle_teams},
        player_stats::{handle_categories, handle_lookup, handle_refresh_stats},
        resolve_credentials,
        serve::handle_serve,
    },
    espn::{EspnClient, LeagueCredentials},
    Config, StatsStore,
};

/// Logs go to stderr so command output on stdout stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn credentials(league: LeagueArgs) -> anyhow::Result<LeagueCredentials> {
    resolve_credentials(league.league_id, league.season).context("resolving league credentials")
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let app = ESPN::parse();
    let config = Config::from_env().context("reading configuration from the environment")?;
    let client = Arc::new(EspnClient::new());

    match app.command {
        Commands::Serve => handle_serve(&config, client)
            .await
            .context("serving the HTTP API")?,

        Commands::Chat => handle_chat(&config, client)
            .await
            .context("running the assistant")?,

        Commands::Teams { league } => {
            let creds = credentials(league)?;
            handle_teams(client.as_ref(), &creds).await?
        }

        Commands::Roster { league, team_id } => {
            let creds = credentials(league)?;
            handle_roster(client.as_ref(), &creds, team_id).await?
        }

        Commands::FreeAgents {
            league,
            position,
            size,
        } => {
            let creds = credentials(league)?;
            handle_free_agents(client.as_ref(), &creds, position, size).await?
        }

        Commands::RefreshStats { league } => {
            let creds = credentials(league)?;
            let store = StatsStore::new(&config.db_path);
            handle_refresh_stats(client.as_ref(), &store, &creds, config.free_agent_pool)
                .await
                .with_context(|| format!("refreshing stats in {}", config.db_path.display()))?
        }

        Commands::Lookup { name, json } => {
            let store = StatsStore::new(&config.db_path);
            handle_lookup(&store, &name, json)
                .with_context(|| format!("reading {}", config.db_path.display()))?
        }

        Commands::Categories { league } => {
            let creds = credentials(league)?;
            handle_categories(client.as_ref(), &creds).await?
        }
    }

    Ok(())
}
