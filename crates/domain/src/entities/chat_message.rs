//! Chat message entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::TurnId;

/// Who wrote a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// Message typed by the user
    User,
    /// Reply from the weather assistant
    Assistant,
}

impl Sender {
    /// Short tag used when rendering a transcript
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// A single message in a chat transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Turn this message belongs to
    pub turn: TurnId,
    /// Author of the message
    pub sender: Sender,
    /// Message text
    pub text: String,
    /// When the message was created
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a user message
    pub fn user(turn: TurnId, text: impl Into<String>) -> Self {
        Self {
            turn,
            sender: Sender::User,
            text: text.into(),
            created_at: Utc::now(),
        }
    }

    /// Create an assistant message
    pub fn assistant(turn: TurnId, text: impl Into<String>) -> Self {
        Self {
            turn,
            sender: Sender::Assistant,
            text: text.into(),
            created_at: Utc::now(),
        }
    }

    /// Whether the user wrote this message
    #[must_use]
    pub const fn is_user(&self) -> bool {
        matches!(self.sender, Sender::User)
    }
}
