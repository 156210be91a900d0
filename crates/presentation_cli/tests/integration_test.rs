//! Integration tests for CLI building blocks
//!
//! Drive the chat widget through the terminal view with a stub backend and
//! render presenter output, without touching the network.

use std::sync::Arc;

use application::{
    APOLOGY_MESSAGE, ApplicationError, ChatBackendPort, ChatTranscript, ResultPresenter, UiEvent,
};
use async_trait::async_trait;
use domain::{ClassificationResult, Sender};
use presentation_cli::{TerminalView, render_card};

/// Backend that echoes the query, or fails when asked to
struct EchoBackend;

#[async_trait]
impl ChatBackendPort for EchoBackend {
    async fn ask(&self, query: &str) -> Result<String, ApplicationError> {
        if query == "fail" {
            return Err(ApplicationError::ExternalService("connection reset".into()));
        }
        Ok(format!("echo: {query}"))
    }
}

fn chat_with_echo(echo_user: bool) -> ChatTranscript<TerminalView<Vec<u8>>> {
    ChatTranscript::new(Arc::new(EchoBackend), TerminalView::new(Vec::new(), echo_user))
}

fn printed(chat: &ChatTranscript<TerminalView<Vec<u8>>>) -> String {
    String::from_utf8_lossy(chat.view().writer()).into_owned()
}

#[tokio::test]
async fn terminal_chat_prints_both_turns() {
    let mut chat = chat_with_echo(true);
    chat.view_mut().set_input("Will it rain tomorrow?");

    chat.submit(&UiEvent::SendActivated).await;

    assert_eq!(
        printed(&chat),
        "🧑 you: Will it rain tomorrow?\n🤖 assistant: echo: Will it rain tomorrow?\n"
    );
}

#[tokio::test]
async fn terminal_chat_prints_apology_on_failure() {
    let mut chat = chat_with_echo(false);
    chat.view_mut().set_input("fail");

    chat.submit(&UiEvent::KeyPress("Enter".into())).await;

    assert_eq!(printed(&chat), format!("🤖 assistant: {APOLOGY_MESSAGE}\n"));
    let messages = chat.transcript().messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].sender, Sender::Assistant);
}

#[tokio::test]
async fn terminal_chat_ignores_blank_lines() {
    let mut chat = chat_with_echo(true);
    chat.view_mut().set_input("    ");

    assert!(chat.submit(&UiEvent::SendActivated).await.is_none());
    assert!(printed(&chat).is_empty());
    assert!(chat.transcript().is_empty());
}

#[tokio::test]
async fn terminal_chat_keeps_session_transcript() {
    let mut chat = chat_with_echo(false);
    for line in ["first", "second", "third"] {
        chat.view_mut().set_input(line);
        chat.submit(&UiEvent::SendActivated).await;
    }

    let texts: Vec<_> = chat
        .transcript()
        .messages()
        .iter()
        .map(|m| m.text.as_str())
        .collect();
    assert_eq!(
        texts,
        [
            "first",
            "echo: first",
            "second",
            "echo: second",
            "third",
            "echo: third"
        ]
    );
}

#[test]
fn classifier_payload_renders_card() {
    let payload = r#"{
        "predicted_class": "lightning",
        "prediction": 0.9712,
        "top_predictions": [
            {"class": "lightning", "percentage": 97.12},
            {"class": "rain", "percentage": 2.04}
        ]
    }"#;
    let result: ClassificationResult = serde_json::from_str(payload).unwrap();
    let card = ResultPresenter::new().present(Some(&result)).unwrap();
    let text = render_card(&card);

    assert!(text.contains("Lightning Detected"));
    assert!(text.contains("97.1%"));
    assert!(text.contains("  rain: 2.0%\n"));
}

#[test]
fn unknown_payload_renders_fallback_card() {
    let result = ClassificationResult::new("volcanic ash", 0.3);
    let card = ResultPresenter::new().present(Some(&result)).unwrap();
    let text = render_card(&card);

    assert!(card.is_fallback());
    assert!(text.contains("Volcanic Ash Detected"));
    assert!(text.contains("30.0%"));
}
