//! Transcript view port
//!
//! The narrow capability a chat widget needs from its host surface:
//! read and clear the input field, show a message, keep the newest
//! message visible.

use domain::ChatMessage;
#[cfg(test)]
use mockall::automock;

/// Key that submits the input field
pub const SUBMIT_KEY: &str = "Enter";

/// Input event delivered by the host surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The send control was activated
    SendActivated,
    /// A key was pressed while the input field had focus
    KeyPress(String),
}

impl UiEvent {
    /// Whether this event asks the widget to send the current input
    #[must_use]
    pub fn triggers_send(&self) -> bool {
        match self {
            Self::SendActivated => true,
            Self::KeyPress(key) => key == SUBMIT_KEY,
        }
    }
}

/// Rendering surface owned by the host, driven by the chat widget
#[cfg_attr(test, automock)]
pub trait TranscriptView {
    /// Current contents of the input field
    fn input_text(&self) -> String;

    /// Empty the input field
    fn clear_input(&mut self);

    /// Render one appended message
    fn append_turn(&mut self, message: &ChatMessage);

    /// Scroll so the newest message is visible
    fn scroll_to_end(&mut self);
}
