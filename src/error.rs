//! Error types for the ESPN Fantasy Basketball assistant

use thiserror::Error;


pub type Result<T> = std::result::Result<T, FbbError>;

#[derive(Error, Debug)]
pub enum FbbError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("League ID not provided and {env_var} environment variable not set")]
    MissingLeagueId { env_var: String },

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("{message}")]
    Validation { message: String },

    #[error("No active save set")]
    NoActiveSession,

    #[error("No team selected for active save")]
    NoTeamSelected,

    #[error("Team {team_id} not found in league")]
    TeamNotFound { team_id: u32 },

    #[error("ESPN rejected the league credentials")]
    Unauthorized,

    #[error("League unavailable (status {status}): {reason}")]
    LeagueUnavailable { status: u16, reason: String },

    #[error("ESPN API returned no data")]
    NoData,

    #[error("Player statistics table does not exist")]
    SchemaMissing,

    #[error("Invalid statistic category name: {name:?}")]
    InvalidCategory { name: String },

    #[error("Category {name:?} is not a column of the statistics table")]
    UnknownCategory { name: String },

    #[error("No season averages recorded for {name}")]
    MissingAverages { name: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },

    #[error("Language model error: {message}")]
    Llm { message: String },

    #[error("Terminal input failed: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

impl FbbError {
    /// Shorthand for a request validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        FbbError::Validation {
            message: message.into(),
        }
    }

    /// Whether the failure was caused by the caller's input or session state
    /// rather than by an upstream or internal fault.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            FbbError::Validation { .. }
                | FbbError::NoActiveSession
                | FbbError::NoTeamSelected
                | FbbError::TeamNotFound { .. }
                | FbbError::InvalidNumber(_)
                | FbbError::InvalidPosition { .. }
                | FbbError::MissingLeagueId { .. }
        )
    }

    /// Whether the failure came from the ESPN side of the league adapter.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            FbbError::Http(_)
                | FbbError::Unauthorized
                | FbbError::LeagueUnavailable { .. }
                | FbbError::NoData
        )
    }
}
