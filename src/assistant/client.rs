//! Ollama chat client.
//!
//! Sends the whole transcript to `/api/chat` with `stream: false` and returns
//! the single assistant message in the reply.

use async_trait::async_trait;
use tracing::debug;

use super::types::{ChatMessage, ChatRequest, ChatResponse, ToolSpec};
use crate::{FbbError, Result};

/// A chat-capable language model runtime.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn chat(&self, messages: &[ChatMessage], tools: Option<&[ToolSpec]>)
        -> Result<ChatMessage>;
}

pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ChatBackend for OllamaClient {
    async fn chat(
        &self,
        messages: &[ChatMessage],
        tools: Option<&[ToolSpec]>,
    ) -> Result<ChatMessage> {
        let url = format!("{}/api/chat", self.base_url);
        let body = ChatRequest {
            model: &self.model,
            messages,
            tools,
            stream: false,
        };
        debug!(%url, model = %self.model, messages = messages.len(), "chat request");

        let res = self.http.post(&url).json(&body).send().await?;
        let status = res.status();
        if !status.is_success() {
            let text = res.text().await.unwrap_or_default();
            return Err(FbbError::Llm {
                message: format!("{} returned {}: {}", url, status, text.trim()),
            });
        }

        let parsed: ChatResponse = res.json().await?;
        Ok(parsed.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::types::Role;
    use serde_json::json;
    use wiremock::{
        matchers::{body_partial_json, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    #[tokio::test]
    async fn test_chat_posts_transcript_without_streaming() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .and(body_partial_json(json!({"model": "llama3.1", "stream": false})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "model": "llama3.1",
                "message": {"role": "assistant", "content": "Start Jokic."},
                "done": true
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = OllamaClient::new(format!("{}/", server.uri()), "llama3.1");
        let reply = client
            .chat(&[ChatMessage::user("who should I start?")], None)
            .await
            .unwrap();

        assert_eq!(reply.role, Role::Assistant);
        assert_eq!(reply.content, "Start Jokic.");
    }

    #[tokio::test]
    async fn test_chat_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(404).set_body_string("model not found"))
            .mount(&server)
            .await;

        let client = OllamaClient::new(server.uri(), "missing");
        let err = client.chat(&[], None).await.unwrap_err();

        match err {
            FbbError::Llm { message } => assert!(message.contains("model not found")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
