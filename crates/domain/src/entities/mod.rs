//! Domain entities - Objects with identity and lifecycle

mod chat_message;
mod classification;
mod transcript;

pub use chat_message::{ChatMessage, Sender};
pub use classification::{Alternative, ClassificationResult};
pub use transcript::Transcript;
