//! Chat transcript widget
//!
//! Drives one chat surface: reads the input field on send, optimistically
//! appends the user's message, issues a single backend request and appends
//! the reply (or a fixed apology) to an append-only transcript.
//!
//! Every turn carries a [`TurnId`]. Overlapping sends through
//! [`ChatTranscript::begin_send`] and [`ChatTranscript::complete`] append
//! replies in completion order, but each reply is tagged with the turn of
//! the message it answers.

use std::{collections::BTreeSet, fmt, sync::Arc};

use domain::{ChatMessage, Transcript, TurnId};
use tracing::{debug, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{ChatBackendPort, TranscriptView, UiEvent},
};

/// Reply shown when a request fails for any reason
pub const APOLOGY_MESSAGE: &str = "Sorry, I couldn't process your request.";

/// Widget state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatState {
    /// No request outstanding
    Idle,
    /// At least one request is awaiting a reply
    Sending,
    /// A failure is being rendered as an apology
    ErrorDisplayed,
}

/// A user turn that has been appended and still needs a reply
#[derive(Debug)]
#[must_use = "a pending turn stays unanswered until it is resolved and completed"]
pub struct PendingTurn {
    turn: TurnId,
    query: String,
}

impl PendingTurn {
    /// Turn this request belongs to
    pub const fn turn(&self) -> TurnId {
        self.turn
    }

    /// Trimmed query text that was sent
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Issue the backend request for this turn
    #[instrument(skip(self, backend), fields(turn = %self.turn, query_len = self.query.len()))]
    pub async fn resolve(self, backend: &dyn ChatBackendPort) -> CompletedTurn {
        let outcome = backend.ask(&self.query).await;
        CompletedTurn {
            turn: self.turn,
            outcome,
        }
    }
}

/// Backend outcome for a turn, ready to be appended
#[derive(Debug)]
pub struct CompletedTurn {
    turn: TurnId,
    outcome: Result<String, ApplicationError>,
}

impl CompletedTurn {
    /// Turn this outcome answers
    pub const fn turn(&self) -> TurnId {
        self.turn
    }

    /// Whether the backend produced a reply
    pub const fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Chat widget bound to a host-provided [`TranscriptView`]
pub struct ChatTranscript<V> {
    backend: Arc<dyn ChatBackendPort>,
    view: V,
    transcript: Transcript,
    next_turn: TurnId,
    in_flight: BTreeSet<TurnId>,
    state: ChatState,
}

impl<V: fmt::Debug> fmt::Debug for ChatTranscript<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatTranscript")
            .field("view", &self.view)
            .field("messages", &self.transcript.len())
            .field("in_flight", &self.in_flight)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<V: TranscriptView> ChatTranscript<V> {
    /// Create a widget with an empty transcript
    pub fn new(backend: Arc<dyn ChatBackendPort>, view: V) -> Self {
        Self {
            backend,
            view,
            transcript: Transcript::new(),
            next_turn: TurnId::FIRST,
            in_flight: BTreeSet::new(),
            state: ChatState::Idle,
        }
    }

    /// Current widget state
    pub const fn state(&self) -> ChatState {
        self.state
    }

    /// Read-only view of the transcript
    pub const fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// The host surface
    pub const fn view(&self) -> &V {
        &self.view
    }

    /// Mutable access to the host surface, e.g. to type into the input
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Number of requests awaiting a reply
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    /// Shared handle to the backend, for resolving pending turns
    pub fn backend(&self) -> Arc<dyn ChatBackendPort> {
        Arc::clone(&self.backend)
    }

    /// React to a UI event
    ///
    /// Returns the pending turn when the event triggered a send.
    pub fn handle_event(&mut self, event: &UiEvent) -> Option<PendingTurn> {
        if !event.triggers_send() {
            return None;
        }
        self.begin_send()
    }

    /// Start a send from the current input
    ///
    /// Blank input is ignored. Otherwise the trimmed text is appended as a
    /// user message and the input is cleared before any network activity.
    pub fn begin_send(&mut self) -> Option<PendingTurn> {
        let raw = self.view.input_text();
        let query = raw.trim();
        if query.is_empty() {
            debug!("Ignoring send with blank input");
            return None;
        }
        let query = query.to_string();

        let turn = self.next_turn;
        self.next_turn = turn.next();

        self.append(ChatMessage::user(turn, query.clone()));
        self.view.clear_input();
        self.in_flight.insert(turn);
        self.transition(ChatState::Sending);

        debug!(turn = %turn, in_flight = self.in_flight.len(), "Turn sent");
        Some(PendingTurn { turn, query })
    }

    /// Append the reply for a finished turn
    ///
    /// Failures are logged and replaced by [`APOLOGY_MESSAGE`]; they never
    /// reach the caller.
    pub fn complete(&mut self, completed: CompletedTurn) -> &ChatMessage {
        let CompletedTurn { turn, outcome } = completed;
        if !self.in_flight.remove(&turn) {
            warn!(turn = %turn, "Completion for a turn that is not in flight");
        }

        let message = match outcome {
            Ok(reply) => ChatMessage::assistant(turn, reply),
            Err(e) => {
                warn!(turn = %turn, error = %e, "Chat request failed");
                self.transition(ChatState::ErrorDisplayed);
                ChatMessage::assistant(turn, APOLOGY_MESSAGE)
            },
        };

        let index = self.transcript.len();
        self.append(message);

        let settled = if self.in_flight.is_empty() {
            ChatState::Idle
        } else {
            ChatState::Sending
        };
        self.transition(settled);

        &self.transcript.messages()[index]
    }

    /// Handle an event and, if it sent, wait for the reply
    ///
    /// Sends made this way are serialized: the reply is appended before
    /// the call returns.
    pub async fn submit(&mut self, event: &UiEvent) -> Option<&ChatMessage> {
        let pending = self.handle_event(event)?;
        Some(self.finish(pending).await)
    }

    /// Send the current input and wait for the reply
    pub async fn send(&mut self) -> Option<&ChatMessage> {
        let pending = self.begin_send()?;
        Some(self.finish(pending).await)
    }

    async fn finish(&mut self, pending: PendingTurn) -> &ChatMessage {
        let backend = self.backend();
        let completed = pending.resolve(backend.as_ref()).await;
        self.complete(completed)
    }

    fn append(&mut self, message: ChatMessage) {
        self.view.append_turn(&message);
        self.view.scroll_to_end();
        self.transcript.append(message);
    }

    fn transition(&mut self, to: ChatState) {
        if self.state != to {
            debug!(from = ?self.state, to = ?to, "Chat state transition");
            self.state = to;
        }
    }
}

#[cfg(test)]
mod tests {
    use domain::Sender;
    use mockall::Sequence;

    use super::*;
    use crate::ports::{MockChatBackendPort, MockTranscriptView};

    /// Minimal in-memory view recording everything the widget does
    #[derive(Debug, Default)]
    struct RecordingView {
        input: String,
        rendered: Vec<ChatMessage>,
        scrolls: usize,
        clears: usize,
    }

    impl RecordingView {
        fn with_input(input: &str) -> Self {
            Self {
                input: input.to_string(),
                ..Self::default()
            }
        }
    }

    impl TranscriptView for RecordingView {
        fn input_text(&self) -> String {
            self.input.clone()
        }

        fn clear_input(&mut self) {
            self.input.clear();
            self.clears += 1;
        }

        fn append_turn(&mut self, message: &ChatMessage) {
            self.rendered.push(message.clone());
        }

        fn scroll_to_end(&mut self) {
            self.scrolls += 1;
        }
    }

    fn replying(reply: &'static str) -> Arc<dyn ChatBackendPort> {
        let mut mock = MockChatBackendPort::new();
        mock.expect_ask().returning(move |_| Ok(reply.to_string()));
        Arc::new(mock)
    }

    fn failing() -> Arc<dyn ChatBackendPort> {
        let mut mock = MockChatBackendPort::new();
        mock.expect_ask()
            .returning(|_| Err(ApplicationError::ExternalService("connection refused".into())));
        Arc::new(mock)
    }

    fn never_called() -> Arc<dyn ChatBackendPort> {
        let mut mock = MockChatBackendPort::new();
        mock.expect_ask().never();
        Arc::new(mock)
    }

    #[tokio::test]
    async fn blank_input_is_a_no_op() {
        for input in ["", "   ", "\t\n"] {
            let mut chat = ChatTranscript::new(never_called(), RecordingView::with_input(input));
            assert!(chat.send().await.is_none());
            assert!(chat.transcript().is_empty());
            assert!(chat.view().rendered.is_empty());
            assert_eq!(chat.view().clears, 0);
            assert_eq!(chat.state(), ChatState::Idle);
        }
    }

    #[tokio::test]
    async fn successful_turn_appends_user_then_assistant() {
        let mut mock = MockChatBackendPort::new();
        mock.expect_ask()
            .withf(|q| q == "Will it rain tomorrow?")
            .times(1)
            .returning(|_| Ok("Expect light showers.".to_string()));

        let view = RecordingView::with_input("  Will it rain tomorrow?  ");
        let mut chat = ChatTranscript::new(Arc::new(mock), view);

        let reply = chat.send().await.unwrap();
        assert_eq!(reply.sender, Sender::Assistant);
        assert_eq!(reply.text, "Expect light showers.");

        let messages = chat.transcript().messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender, Sender::User);
        assert_eq!(messages[0].text, "Will it rain tomorrow?");
        assert_eq!(messages[0].turn, messages[1].turn);
        assert!(chat.view().input.is_empty());
        assert_eq!(chat.state(), ChatState::Idle);
    }

    #[tokio::test]
    async fn failure_appends_exactly_one_apology() {
        let mut chat = ChatTranscript::new(failing(), RecordingView::with_input("hello"));

        let reply = chat.send().await.unwrap();
        assert_eq!(reply.text, APOLOGY_MESSAGE);

        let assistant: Vec<_> = chat
            .transcript()
            .messages()
            .iter()
            .filter(|m| m.sender == Sender::Assistant)
            .collect();
        assert_eq!(assistant.len(), 1);
        assert_eq!(chat.state(), ChatState::Idle);
    }

    #[test]
    fn user_message_is_appended_before_reply() {
        let mut chat = ChatTranscript::new(never_called(), RecordingView::with_input("snow?"));

        let pending = chat.begin_send().unwrap();
        assert_eq!(pending.query(), "snow?");
        assert_eq!(chat.transcript().len(), 1);
        assert!(chat.view().input.is_empty());
        assert_eq!(chat.state(), ChatState::Sending);
        assert_eq!(chat.in_flight(), 1);
    }

    #[test]
    fn every_append_scrolls_to_end() {
        let mut chat = ChatTranscript::new(never_called(), RecordingView::with_input("a"));
        let pending = chat.begin_send().unwrap();
        let turn = pending.turn();
        chat.complete(CompletedTurn {
            turn,
            outcome: Ok("b".into()),
        });

        assert_eq!(chat.view().rendered.len(), 2);
        assert_eq!(chat.view().scrolls, 2);
    }

    #[tokio::test]
    async fn view_calls_happen_in_order() {
        let mut seq = Sequence::new();
        let mut view = MockTranscriptView::new();
        view.expect_input_text()
            .times(1)
            .in_sequence(&mut seq)
            .return_const("hi".to_string());
        view.expect_append_turn()
            .withf(|m| m.sender == Sender::User && m.text == "hi")
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        view.expect_scroll_to_end()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        view.expect_clear_input()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        view.expect_append_turn()
            .withf(|m| m.sender == Sender::Assistant && m.text == "hello")
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        view.expect_scroll_to_end()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let mut chat = ChatTranscript::new(replying("hello"), view);
        assert!(chat.send().await.is_some());
    }

    #[tokio::test]
    async fn enter_key_and_send_control_both_submit() {
        let mut chat = ChatTranscript::new(replying("ok"), RecordingView::with_input("one"));
        assert!(chat.submit(&UiEvent::KeyPress("Enter".into())).await.is_some());

        chat.view_mut().input = "two".into();
        assert!(chat.submit(&UiEvent::SendActivated).await.is_some());

        assert_eq!(chat.transcript().len(), 4);
    }

    #[tokio::test]
    async fn other_keys_do_not_submit() {
        let mut chat = ChatTranscript::new(never_called(), RecordingView::with_input("typing"));
        assert!(chat.submit(&UiEvent::KeyPress("g".into())).await.is_none());
        assert!(chat.transcript().is_empty());
        assert_eq!(chat.view().input, "typing");
    }

    #[tokio::test]
    async fn out_of_order_replies_keep_their_turns() {
        let mut mock = MockChatBackendPort::new();
        mock.expect_ask().returning(|q| Ok(format!("answer to {q}")));
        let mut chat = ChatTranscript::new(Arc::new(mock), RecordingView::with_input("first"));

        let first = chat.begin_send().unwrap();
        chat.view_mut().input = "second".into();
        let second = chat.begin_send().unwrap();
        assert_eq!(chat.in_flight(), 2);

        let backend = chat.backend();
        let second_done = second.resolve(backend.as_ref()).await;
        let first_done = first.resolve(backend.as_ref()).await;

        let second_turn = second_done.turn();
        chat.complete(second_done);
        assert_eq!(chat.state(), ChatState::Sending);
        chat.complete(first_done);
        assert_eq!(chat.state(), ChatState::Idle);

        let messages = chat.transcript().messages();
        assert_eq!(messages[2].text, "answer to second");
        assert_eq!(messages[2].turn, second_turn);
        assert_eq!(messages[3].text, "answer to first");
        assert_eq!(messages[3].turn, messages[0].turn);
    }

    #[test]
    fn turn_ids_increase() {
        let mut chat = ChatTranscript::new(never_called(), RecordingView::with_input("a"));
        let a = chat.begin_send().unwrap();
        chat.view_mut().input = "b".into();
        let b = chat.begin_send().unwrap();
        assert!(b.turn() > a.turn());
    }

    #[test]
    fn failed_completion_with_others_in_flight_stays_sending() {
        let mut chat = ChatTranscript::new(never_called(), RecordingView::with_input("a"));
        let a = chat.begin_send().unwrap();
        chat.view_mut().input = "b".into();
        let _b = chat.begin_send().unwrap();

        chat.complete(CompletedTurn {
            turn: a.turn(),
            outcome: Err(ApplicationError::InvalidResponse("not json".into())),
        });
        assert_eq!(chat.state(), ChatState::Sending);
        assert_eq!(chat.transcript().last().unwrap().text, APOLOGY_MESSAGE);
    }

    #[test]
    fn debug_does_not_require_backend_debug() {
        let chat = ChatTranscript::new(never_called(), RecordingView::default());
        let debug = format!("{chat:?}");
        assert!(debug.contains("ChatTranscript"));
        assert!(debug.contains("Idle"));
    }
}
