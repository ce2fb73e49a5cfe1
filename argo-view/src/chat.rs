//! Chat transcript state for the chatbot widget.

use serde::Serialize;

/// First bot message of every session.
pub const GREETING: &str = "Hello! How can I help you today?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
}

/// Ordered chat history. Message ids increase monotonically.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl Default for ChatTranscript {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatTranscript {
    pub fn new() -> Self {
        let mut transcript = Self {
            messages: Vec::new(),
            next_id: 1,
        };
        transcript.push(GREETING.to_string(), Sender::Bot);
        transcript
    }

    /// Record a user message. Returns the text to send to the webhook, or
    /// `None` for blank input, which is neither recorded nor sent.
    pub fn submit(&mut self, input: &str) -> Option<String> {
        if input.trim().is_empty() {
            return None;
        }
        self.push(input.to_string(), Sender::User);
        Some(input.to_string())
    }

    /// Record a bot reply.
    pub fn receive(&mut self, text: impl Into<String>) {
        self.push(text.into(), Sender::Bot);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    fn push(&mut self, text: String, sender: Sender) {
        self.messages.push(ChatMessage {
            id: self.next_id,
            text,
            sender,
        });
        self.next_id += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_greeting() {
        let transcript = ChatTranscript::new();
        assert_eq!(transcript.messages().len(), 1);
        assert_eq!(transcript.messages()[0].text, GREETING);
        assert_eq!(transcript.messages()[0].sender, Sender::Bot);
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut transcript = ChatTranscript::new();
        assert_eq!(transcript.submit("   "), None);
        assert_eq!(transcript.messages().len(), 1);
    }

    #[test]
    fn user_then_bot_with_increasing_ids() {
        let mut transcript = ChatTranscript::new();
        let outgoing = transcript.submit("temperature at 2902746?");
        assert_eq!(outgoing.as_deref(), Some("temperature at 2902746?"));
        transcript.receive("About 28.4 °C at the surface.");

        let messages = transcript.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].sender, Sender::User);
        assert_eq!(messages[2].sender, Sender::Bot);
        assert!(messages.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn overlapping_sends_are_all_recorded() {
        let mut transcript = ChatTranscript::new();
        transcript.submit("one");
        transcript.submit("two");
        transcript.receive("reply to one");
        let texts: Vec<&str> = transcript.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec![GREETING, "one", "two", "reply to one"]);
    }
}
