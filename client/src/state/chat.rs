//! Chat history for the assistant panel.
//!
//! DESIGN
//! ======
//! Messages are appended locally as soon as they exist (the user's prompt
//! before the request goes out, the reply or an error row after) so the panel
//! never waits on the network to show what was typed.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::{ChatMessage, ChatRole};

/// Conversation shown in the chat panel.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    /// A prompt is in flight; the input is disabled until it settles.
    pub sending: bool,
}

impl ChatState {
    /// Append the user's prompt and mark the conversation as waiting.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.push(ChatRole::User, content.into());
        self.sending = true;
    }

    /// Append an assistant answer and finish the in-flight request.
    pub fn push_reply(&mut self, content: impl Into<String>) {
        self.push(ChatRole::Assistant, content.into());
        self.sending = false;
    }

    /// Append an error row and finish the in-flight request.
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.push(ChatRole::Error, message.into());
        self.sending = false;
    }

    pub fn clear(&mut self) {
        self.messages.clear();
        self.sending = false;
    }

    /// Whether a new prompt may be submitted.
    #[must_use]
    pub fn can_send(&self, draft: &str) -> bool {
        !self.sending && !draft.trim().is_empty()
    }

    fn push(&mut self, role: ChatRole, content: String) {
        self.messages.push(ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content,
        });
    }
}
