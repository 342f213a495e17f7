//! Interactive assistant command

use rustyline::{error::ReadlineError, DefaultEditor};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

use crate::{
    assistant::{load_selection, save_selection, Conversation, LeagueInfoTool, OllamaClient, TerminalPrompt},
    espn::LeagueSource,
    Config, Result,
};

const HISTORY_FILE: &str = "chat_history.txt";

/// Whether a line ends the chat loop.
pub fn is_exit_command(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "exit" | "quit")
}

/// Line-editor history, kept next to the saved league.
pub fn history_path(config: &Config) -> PathBuf {
    config.league_file.with_file_name(HISTORY_FILE)
}

/// Handle the chat command
pub async fn handle_chat(config: &Config, source: Arc<dyn LeagueSource>) -> Result<()> {
    let client = OllamaClient::new(&config.ollama_host, &config.model);
    info!(host = %config.ollama_host, model = client.model(), "starting assistant");
    let mut conversation = Conversation::new(client);

    let saved = load_selection(&config.league_file).unwrap_or_else(|e| {
        warn!(path = %config.league_file.display(), error = %e, "ignoring unreadable saved league");
        None
    });

    // The prompt holds stdin only for the opening exchange
    let opening = {
        let prompt = TerminalPrompt::new(io::stdin().lock(), io::stdout());
        let mut tool = LeagueInfoTool::new(source, prompt).remembering(saved);
        let opening = conversation.start(&mut tool).await?;
        if let Some(selection) = tool.selection() {
            println!(
                "Using league {} ({}), team {}",
                selection.credentials.league_id, selection.credentials.season, selection.team_id
            );
            if let Err(e) = save_selection(&config.league_file, selection) {
                warn!(error = %e, "could not save league selection");
            }
        }
        opening
    };
    println!("\nAssistant: {}", opening);

    let mut rl = DefaultEditor::new()?;
    let history = history_path(config);
    let _ = rl.load_history(&history);

    loop {
        match rl.readline("You: ") {
            Ok(line) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(input);
                if is_exit_command(input) {
                    break;
                }

                match conversation.send(input).await {
                    Ok(answer) => println!("Assistant: {}", answer),
                    Err(e) => warn!(error = %e, "assistant turn failed"),
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                warn!(error = %e, "readline error");
                break;
            }
        }
    }

    if let Some(parent) = history.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let _ = rl.save_history(&history);

    info!(turns = conversation.transcript().len(), "assistant session ended");
    Ok(())
}
