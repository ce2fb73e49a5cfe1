//! Chatbot webhook request/response shapes.
//!
//! The webhook takes `{"text": "..."}` and answers with a JSON object whose
//! `text` field is shown verbatim. Any failure becomes [`FALLBACK_REPLY`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shown in place of a bot reply when the webhook call fails.
pub const FALLBACK_REPLY: &str = "Sorry, I couldn't reach the server. Please try again later.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub text: String,
}

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("chat request failed: {0}")]
    Transport(String),

    #[error("chat webhook returned HTTP {status}")]
    Status { status: u16 },

    #[error("chat reply is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Interpret a completed webhook exchange.
pub fn parse_reply(status: u16, body: &str) -> Result<ChatReply, ChatError> {
    if !(200..300).contains(&status) {
        return Err(ChatError::Status { status });
    }
    Ok(serde_json::from_str(body)?)
}

/// The text to show for a webhook outcome.
pub fn reply_text(result: Result<ChatReply, ChatError>) -> String {
    match result {
        Ok(reply) => reply.text,
        Err(e) => {
            log::warn!("[Argo] chat: {}", e);
            FALLBACK_REPLY.to_string()
        }
    }
}

/// Native webhook client. One POST per message, no retry.
#[cfg(feature = "api")]
#[derive(Debug, Clone)]
pub struct ChatClient {
    client: reqwest::Client,
    webhook_url: String,
}

#[cfg(feature = "api")]
impl ChatClient {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            webhook_url: webhook_url.into(),
        }
    }

    pub async fn send(&self, text: &str) -> Result<ChatReply, ChatError> {
        let request = ChatRequest {
            text: text.to_string(),
        };
        let response = self
            .client
            .post(&self.webhook_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;
        parse_reply(status, &body)
    }
}
