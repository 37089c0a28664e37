//! In-memory conversation transcript and the single-send state machine.

use crate::api::{ChatMessage, Role};

/// Whether a send is currently in flight.
///
/// A single-slot guard: while `Sending`, new send intents are rejected, so
/// at most one turn is ever outstanding per conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SendState {
    #[default]
    Idle,
    Sending,
}

/// An ordered, never-persisted message list for one conversation.
///
/// Every send follows the same shape: [`begin_send`](Self::begin_send)
/// records the user message and the streaming placeholder, then exactly one
/// of [`finish_send`](Self::finish_send) or [`abort_send`](Self::abort_send)
/// settles the turn. Both paths return the state machine to `Idle`; there
/// is no way to leave a send dangling.
#[derive(Debug, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    state: SendState,
}

impl Transcript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn state(&self) -> SendState {
        self.state
    }

    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.state == SendState::Sending
    }

    /// Begin a send: record the user's message, append the streaming
    /// placeholder, and return the history to put on the wire.
    ///
    /// Returns `None` without touching the transcript when a send is
    /// already in flight or the trimmed input is empty. The returned
    /// history includes the new user message but never the placeholder.
    pub fn begin_send(&mut self, content: &str) -> Option<Vec<ChatMessage>> {
        if self.is_sending() {
            return None;
        }
        let content = content.trim();
        if content.is_empty() {
            return None;
        }

        self.messages.push(ChatMessage::user(content));
        let history = self.messages.clone();
        self.messages.push(ChatMessage::placeholder());
        self.state = SendState::Sending;

        Some(history)
    }

    /// Replace the in-progress assistant message with new accumulated text.
    pub fn set_streaming_text(&mut self, content: &str, still_streaming: bool) {
        if let Some(last) = self.messages.last_mut() {
            *last = ChatMessage {
                role: Role::Assistant,
                content: content.to_string(),
                is_streaming: still_streaming,
            };
        }
    }

    /// Settle a successful turn.
    pub fn finish_send(&mut self) {
        self.state = SendState::Idle;
    }

    /// Roll back a failed turn: drop the placeholder, keep the user's
    /// message so the turn can be retried, and settle the state.
    pub fn abort_send(&mut self) {
        if self
            .messages
            .last()
            .is_some_and(|m| m.role == Role::Assistant && m.is_streaming)
        {
            self.messages.pop();
        }
        self.state = SendState::Idle;
    }
}
