//! Transcript and phase handling for one assistant session.

use tracing::{debug, info, warn};

use super::{
    client::ChatBackend,
    tools::{league_info_tool, CredentialPrompt, LeagueInfoTool},
    types::ChatMessage,
};
use crate::{FbbError, Result};

pub const SYSTEM_PROMPT: &str = "You are an assistant that provides feedback for users on what to \
                                 do for their fantasy basketball teams based on league information.";

pub const OPENING_REQUEST: &str = "I need to get my ESPN fantasy basketball league information.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the opening exchange, which may call the league tool once.
    Collecting,
    /// Free-form turns.
    Chatting,
}

pub struct Conversation<B> {
    backend: B,
    messages: Vec<ChatMessage>,
    phase: Phase,
}

impl<B: ChatBackend> Conversation<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            messages: vec![ChatMessage::system(SYSTEM_PROMPT)],
            phase: Phase::Collecting,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Opening exchange. Offers the league tool once; if the model calls it,
    /// the results are appended and a final answer is requested without tools.
    /// On failure the transcript is rolled back so `start` can be retried.
    pub async fn start<P: CredentialPrompt>(&mut self, tool: &mut LeagueInfoTool<P>) -> Result<String> {
        if self.phase != Phase::Collecting {
            return Err(FbbError::validation("Conversation already started"));
        }

        let mark = self.messages.len();
        match self.opening_exchange(tool).await {
            Ok(answer) => Ok(self.finish_collecting(answer)),
            Err(e) => {
                self.messages.truncate(mark);
                Err(e)
            }
        }
    }

    async fn opening_exchange<P: CredentialPrompt>(
        &mut self,
        tool: &mut LeagueInfoTool<P>,
    ) -> Result<ChatMessage> {
        self.messages.push(ChatMessage::user(OPENING_REQUEST));
        let tools = [league_info_tool()];
        let reply = self.backend.chat(&self.messages, Some(&tools)).await?;

        if reply.tool_calls.is_empty() {
            debug!("model answered without calling a tool");
            return Ok(reply);
        }

        let calls = reply.tool_calls.clone();
        self.messages.push(reply);
        for call in &calls {
            info!(tool = %call.function.name, "model requested tool");
            match tool.run(call).await {
                Some(result) => self.messages.push(ChatMessage::tool(result.to_string())),
                None => warn!(tool = %call.function.name, "tool call ignored"),
            }
        }

        self.backend.chat(&self.messages, None).await
    }

    fn finish_collecting(&mut self, reply: ChatMessage) -> String {
        let content = reply.content.clone();
        self.messages.push(reply);
        self.phase = Phase::Chatting;
        content
    }

    /// One user turn. The transcript only ever grows.
    pub async fn send(&mut self, input: &str) -> Result<String> {
        if self.phase != Phase::Chatting {
            return Err(FbbError::validation("Conversation has not started"));
        }

        self.messages.push(ChatMessage::user(input));
        match self.backend.chat(&self.messages, None).await {
            Ok(reply) => {
                let content = reply.content.clone();
                self.messages.push(reply);
                Ok(content)
            }
            Err(e) => {
                // Keep user/assistant turns paired
                self.messages.pop();
                Err(e)
            }
        }
    }
}
