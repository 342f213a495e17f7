//! Local language model assistant: an Ollama client, the league-info tool
//! and the conversation loop that ties them together.

pub mod client;
pub mod conversation;
pub mod saved;
pub mod tools;
pub mod types;

pub use client::{ChatBackend, OllamaClient};
pub use conversation::{Conversation, Phase};
pub use saved::{load_selection, save_selection};
pub use tools::{CredentialPrompt, LeagueInfoTool, LeagueSelection, LeagueSummary, TerminalPrompt};
pub use types::{ChatMessage, Role};
