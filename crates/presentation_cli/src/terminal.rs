//! Terminal-backed transcript view
//!
//! The input field is a line buffer filled by the caller; appended turns
//! are written to any [`Write`] sink, flushed on every scroll.

use std::io::Write;

use application::TranscriptView;
use domain::{ChatMessage, Sender};
use tracing::warn;

/// Transcript view that prints turns to a writer
#[derive(Debug)]
pub struct TerminalView<W: Write> {
    input: String,
    out: W,
    echo_user: bool,
}

impl<W: Write> TerminalView<W> {
    /// Create a view writing to `out`
    ///
    /// With `echo_user` unset, user turns are not printed again, which suits
    /// an interactive terminal where the user already sees what they typed.
    pub fn new(out: W, echo_user: bool) -> Self {
        Self {
            input: String::new(),
            out,
            echo_user,
        }
    }

    /// Replace the contents of the input line
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// The underlying writer
    pub fn writer(&self) -> &W {
        &self.out
    }

    fn prefix(sender: Sender) -> &'static str {
        match sender {
            Sender::User => "🧑 you",
            Sender::Assistant => "🤖 assistant",
        }
    }
}

impl<W: Write> TranscriptView for TerminalView<W> {
    fn input_text(&self) -> String {
        self.input.clone()
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }

    fn append_turn(&mut self, message: &ChatMessage) {
        if message.sender == Sender::User && !self.echo_user {
            return;
        }
        if let Err(e) = writeln!(self.out, "{}: {}", Self::prefix(message.sender), message.text) {
            warn!(error = %e, "Failed to write chat message");
        }
    }

    fn scroll_to_end(&mut self) {
        if let Err(e) = self.out.flush() {
            warn!(error = %e, "Failed to flush terminal");
        }
    }
}
