//! Append-only chat transcript

use serde::Serialize;

use super::ChatMessage;
use crate::value_objects::TurnId;

/// Ordered record of chat messages
///
/// Messages can only be appended; nothing is ever edited or removed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// Create an empty transcript
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message and return a reference to the stored copy
    pub fn append(&mut self, message: ChatMessage) -> &ChatMessage {
        self.messages.push(message);
        let last = self.messages.len() - 1;
        &self.messages[last]
    }

    /// All messages, oldest first
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Number of messages
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether no message has been appended yet
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The newest message
    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Messages belonging to one turn, in append order
    pub fn turn(&self, turn: TurnId) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter().filter(move |m| m.turn == turn)
    }
}
