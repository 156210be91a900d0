//! SkyLens CLI building blocks
//!
//! Text rendering for result cards and a terminal-backed transcript view.

pub mod render;
pub mod terminal;

pub use render::{render_card, render_labels};
pub use terminal::TerminalView;
