//! The single tool the assistant may call: collecting league credentials.

use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use std::sync::Arc;
use tracing::{info, warn};

use super::types::{FunctionSpec, ToolCall, ToolSpec};
use crate::{
    espn::{LeagueCredentials, LeagueSource},
    FbbError, LeagueId, Result, Season, TeamId,
};

pub const LEAGUE_INFO_TOOL: &str = "get_league_info";

pub fn league_info_tool() -> ToolSpec {
    ToolSpec {
        kind: "function",
        function: FunctionSpec {
            name: LEAGUE_INFO_TOOL,
            description: "Retrieves ESPN Fantasy Basketball league information by prompting the user \
                          for league ID, year, and authentication cookies (espn_s2 and swid)",
            parameters: json!({"type": "object", "properties": {}, "required": []}),
        },
    }
}

/// What the model sees after a successful tool call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeagueSummary {
    pub league_id: LeagueId,
    pub year: Season,
    pub team_count: usize,
    pub status: &'static str,
}

/// Credentials and team picked during the tool call.
#[derive(Debug, Clone, PartialEq)]
pub struct LeagueSelection {
    pub credentials: LeagueCredentials,
    pub team_id: TeamId,
}

/// Interactive source of league credentials.
pub trait CredentialPrompt {
    fn credentials(&mut self) -> Result<LeagueCredentials>;

    /// Pick the user's team from the league's `id -> name` listing.
    fn choose_team(&mut self, teams: &BTreeMap<TeamId, String>) -> Result<TeamId>;

    /// Whether to reuse the league saved by an earlier session.
    fn confirm_reuse(&mut self, saved: &LeagueSelection) -> Result<bool>;
}

/// Prompts on a writer and reads answers line by line.
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(FbbError::validation("Input closed while prompting"));
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> CredentialPrompt for TerminalPrompt<R, W> {
    fn credentials(&mut self) -> Result<LeagueCredentials> {
        let league_id: LeagueId = self.ask("Enter your league ID (e.g., 123456789): ")?.parse()?;
        let year: Season = self.ask("Enter the year for the league (e.g., 2026): ")?.parse()?;
        let s2 = self.ask("Enter your espn_s2 cookie value: ")?;
        let swid = self.ask("Enter your swid cookie value (including curly braces): ")?;
        Ok(LeagueCredentials::new(league_id, year, s2, swid))
    }

    fn choose_team(&mut self, teams: &BTreeMap<TeamId, String>) -> Result<TeamId> {
        for (id, name) in teams {
            writeln!(self.output, "Team Name: {}, Team ID: {}", name, id)?;
        }
        Ok(self.ask("Enter your Team ID from the above list: ")?.parse()?)
    }

    fn confirm_reuse(&mut self, saved: &LeagueSelection) -> Result<bool> {
        let question = format!(
            "Use saved league {} ({}), team {}? [Y/n]: ",
            saved.credentials.league_id, saved.credentials.season, saved.team_id
        );
        let answer = self.ask(&question)?.to_ascii_lowercase();
        Ok(matches!(answer.as_str(), "" | "y" | "yes"))
    }
}

/// Runs tool calls on behalf of the model.
pub struct LeagueInfoTool<P> {
    source: Arc<dyn LeagueSource>,
    prompt: P,
    remembered: Option<LeagueSelection>,
    selection: Option<LeagueSelection>,
}

impl<P: CredentialPrompt> LeagueInfoTool<P> {
    pub fn new(source: Arc<dyn LeagueSource>, prompt: P) -> Self {
        Self {
            source,
            prompt,
            remembered: None,
            selection: None,
        }
    }

    /// Offer a previously saved league before prompting for a new one.
    pub fn remembering(mut self, saved: Option<LeagueSelection>) -> Self {
        self.remembered = saved;
        self
    }

    /// The league chosen by the last successful call, if any.
    pub fn selection(&self) -> Option<&LeagueSelection> {
        self.selection.as_ref()
    }

    /// Execute one call. Unknown tools yield `None`; failures are reported
    /// back to the model as an error payload instead of aborting the chat.
    pub async fn run(&mut self, call: &ToolCall) -> Option<Value> {
        if call.function.name != LEAGUE_INFO_TOOL {
            warn!(tool = %call.function.name, "model requested an unknown tool");
            return None;
        }

        let payload = match self.league_info().await {
            Ok(summary) => json!(summary),
            Err(e) => {
                warn!(error = %e, "league info tool failed");
                json!({"status": "error", "message": e.to_string()})
            }
        };
        Some(payload)
    }

    async fn league_info(&mut self) -> Result<LeagueSummary> {
        let reused = match self.remembered.take() {
            Some(saved) if self.prompt.confirm_reuse(&saved)? => Some(saved),
            _ => None,
        };
        let credentials = match &reused {
            Some(saved) => saved.credentials.clone(),
            None => self.prompt.credentials()?,
        };
        let league = self.source.fetch_league(&credentials).await?;

        let team_id = match reused {
            Some(saved) => saved.team_id,
            None => self.prompt.choose_team(&league.team_names())?,
        };
        if league.team(team_id).is_none() {
            return Err(FbbError::TeamNotFound {
                team_id: team_id.as_u32(),
            });
        }
        info!(league_id = %league.league_id, %team_id, "league selected");

        let summary = LeagueSummary {
            league_id: league.league_id,
            year: league.season,
            team_count: league.teams.len(),
            status: "success",
        };
        self.selection = Some(LeagueSelection {
            credentials,
            team_id,
        });
        Ok(summary)
    }
}
