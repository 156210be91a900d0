//! Application services - Use case implementations

mod chat_transcript;
mod result_presenter;

pub use chat_transcript::{APOLOGY_MESSAGE, ChatState, ChatTranscript, CompletedTurn, PendingTurn};
pub use result_presenter::{PossibilityLine, PresentError, ResultCard, ResultPresenter};
