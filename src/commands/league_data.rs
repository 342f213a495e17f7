//! Teams, roster and free-agent listings

use crate::{
    espn::{LeagueCredentials, LeagueSource, Player},
    FbbError, Position, Result, TeamId,
};

/// One `id: name` line per team, ordered by team id.
pub fn team_lines(teams: &std::collections::BTreeMap<TeamId, String>) -> Vec<String> {
    teams
        .iter()
        .map(|(id, name)| format!("{:>3}: {}", id.as_u32(), name))
        .collect()
}

/// Player lines as `name (position, injury)`.
pub fn player_lines(players: &[Player]) -> Vec<String> {
    players
        .iter()
        .map(|p| {
            let position = p.position.map(|pos| pos.to_string()).unwrap_or_else(|| "-".into());
            match p.injury_status.as_deref() {
                Some(status) if status != "ACTIVE" => format!("{} ({}, {})", p.name, position, status),
                _ => format!("{} ({})", p.name, position),
            }
        })
        .collect()
}

/// Handle the teams command
pub async fn handle_teams(source: &dyn LeagueSource, creds: &LeagueCredentials) -> Result<()> {
    let league = source.fetch_league(creds).await?;

    if let Some(name) = &league.name {
        println!("{} ({})", name, league.season);
    }
    for line in team_lines(&league.team_names()) {
        println!("{}", line);
    }
    Ok(())
}

/// Handle the roster command
pub async fn handle_roster(
    source: &dyn LeagueSource,
    creds: &LeagueCredentials,
    team_id: TeamId,
) -> Result<()> {
    let league = source.fetch_league(creds).await?;
    let team = league.team(team_id).ok_or(FbbError::TeamNotFound {
        team_id: team_id.as_u32(),
    })?;

    println!("{} ({} players)", team.name, team.roster.len());
    for line in player_lines(&team.roster) {
        println!("  {}", line);
    }
    Ok(())
}

/// Handle the free-agents command
pub async fn handle_free_agents(
    source: &dyn LeagueSource,
    creds: &LeagueCredentials,
    position: Option<Position>,
    size: usize,
) -> Result<()> {
    let players = source.free_agents(creds, position, size).await?;

    let label = position.map(|p| p.label()).unwrap_or("OVERALL");
    println!("Top {} free agents ({})", players.len(), label);
    for (rank, line) in player_lines(&players).into_iter().enumerate() {
        println!("{:>3}. {}", rank + 1, line);
    }
    Ok(())
}
