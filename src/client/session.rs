//! Conversation state on top of the raw chat operation.
//!
//! A session owns an ordered message log and sends it in full on every
//! multi-turn call; there is no windowing, so very long sessions grow
//! unbounded until [`ChatSession::reset_history`]. Message order is strictly
//! chronological. Role alternation is the caller's discipline, not enforced
//! here.

use crate::client::core::GigaChat;
use crate::error::Error;
use crate::types::chat::{ChatMessage, ChatRequest, ChatRole};
use crate::Result;

/// A chat session bound to one client.
///
/// Mutating calls take `&mut self`, so one session serves one caller at a
/// time. Every outgoing request uses the client's configured default model.
pub struct ChatSession<'a> {
    client: &'a GigaChat,
    history: Vec<ChatMessage>,
}

impl<'a> ChatSession<'a> {
    pub(crate) fn new(client: &'a GigaChat) -> Self {
        Self {
            client,
            history: Vec::new(),
        }
    }

    /// The accumulated message log.
    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Clear the history. Token state and the model catalog are untouched.
    pub fn reset_history(&mut self) {
        self.history.clear();
    }

    /// Single-turn question as the `user` role. The persistent history is
    /// not consulted and not modified.
    pub async fn ask(&self, prompt: &str) -> Result<Option<String>> {
        self.ask_as(ChatRole::User, prompt).await
    }

    /// Single-turn question with an explicit role.
    pub async fn ask_as(&self, role: ChatRole, prompt: &str) -> Result<Option<String>> {
        let prompt = require_text(prompt)?;
        let message = ChatMessage::new(role, prompt);
        self.send_dialog(std::slice::from_ref(&message)).await
    }

    /// Multi-turn question: appends the user message, sends the entire
    /// history, and appends the assistant reply when one arrives.
    ///
    /// On an empty reply the user message stays in the history with no
    /// assistant message after it: a failed turn does not fabricate a
    /// reply, and the user's utterance is not rolled back.
    pub async fn ask_with_history(&mut self, text: &str) -> Result<Option<String>> {
        let text = require_text(text)?;
        self.history.push(ChatMessage::user(text));
        let reply = self.send_dialog(&self.history).await?;
        if let Some(content) = &reply {
            self.history.push(ChatMessage::assistant(content.clone()));
        }
        Ok(reply)
    }

    async fn send_dialog(&self, messages: &[ChatMessage]) -> Result<Option<String>> {
        if messages.is_empty() {
            return Err(Error::configuration(
                "conversation requires at least one message",
            ));
        }
        // Owned copies go on the wire; mutating the outgoing request can
        // never reach back into the stored history.
        let request = ChatRequest::new(
            self.client.options().default_model.clone(),
            messages.to_vec(),
        );
        let response = self.client.chat(&request).await?;
        let content = response
            .and_then(|response| response.choices.into_iter().next())
            .and_then(|choice| choice.message)
            .map(|message| message.content);
        let limit = self.client.options().response_character_limit;
        Ok(content.map(|content| truncate_to_limit(content, limit)))
    }
}

/// Prefix cut to `limit` characters; zero disables truncation.
fn truncate_to_limit(content: String, limit: usize) -> String {
    if limit == 0 || content.chars().count() <= limit {
        return content;
    }
    content.chars().take(limit).collect()
}

fn require_text(text: &str) -> Result<&str> {
    if text.trim().is_empty() {
        return Err(Error::configuration("prompt must not be blank"));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_is_a_prefix_cut() {
        assert_eq!(truncate_to_limit("hello world".into(), 5), "hello");
        assert_eq!(truncate_to_limit("hello".into(), 5), "hello");
        assert_eq!(truncate_to_limit("hi".into(), 5), "hi");
    }

    #[test]
    fn zero_limit_disables_truncation() {
        assert_eq!(truncate_to_limit("hello world".into(), 0), "hello world");
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        assert_eq!(truncate_to_limit("привет мир".into(), 6), "привет");
    }

    #[test]
    fn blank_prompt_rejected() {
        assert!(matches!(require_text(" \t "), Err(Error::Configuration(_))));
        assert_eq!(require_text("hi").unwrap(), "hi");
    }
}
