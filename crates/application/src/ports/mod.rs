//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod chat_backend_port;
mod classifier_port;
mod transcript_view;

#[cfg(test)]
pub use chat_backend_port::MockChatBackendPort;
pub use chat_backend_port::ChatBackendPort;
#[cfg(test)]
pub use classifier_port::MockClassifierPort;
pub use classifier_port::ClassifierPort;
#[cfg(test)]
pub use transcript_view::MockTranscriptView;
pub use transcript_view::{SUBMIT_KEY, TranscriptView, UiEvent};
