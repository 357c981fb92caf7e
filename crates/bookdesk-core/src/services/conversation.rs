//! Conversation session - drives the turn-taking protocol with the
//! remote assistant for one book at a time.
//!
//! The transcript is append-only and owned exclusively by the session.
//! Completion failures become assistant turns with a fallback message
//! rather than errors: there is no error state distinct from idle, so
//! a failed turn never blocks the next send. This is intentional - the
//! transcript stays monotonic and the conversation can always continue.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::{Book, BookId, Conversation, Turn, TurnRole};
use crate::events::AppEvent;
use crate::ports::{AppEventEmitter, RemoteGatewayPort};

/// Assistant turn rendered in place of a reply when the completion
/// call fails.
pub const ASSISTANT_UNAVAILABLE_REPLY: &str =
    "Sorry, the assistant is unavailable right now. Please try again.";

/// The synthesized user turn that opens every conversation.
#[must_use]
pub fn opening_prompt(title: &str, author: &str) -> String {
    format!("Tell me about \"{title}\" by {author}. What is this book about?")
}

/// Outcome of a [`ConversationSession::send`] call.
///
/// Rejections are quiet no-ops: the transcript and sending flag are
/// untouched and nothing was queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// The user turn was appended and answered (with a reply or the
    /// fallback message).
    Sent,
    /// Rejected: the text was empty after trimming.
    EmptyText,
    /// Rejected: a completion is already in flight.
    Busy,
    /// Rejected: no conversation has been started.
    NotStarted,
}

/// Manages one conversation at a time and its alternating user and
/// assistant turns.
pub struct ConversationSession {
    gateway: Arc<dyn RemoteGatewayPort>,
    emitter: Arc<dyn AppEventEmitter>,
    state: Mutex<Option<Conversation>>,
    /// Bumped by every `start`. A completion that resolves after the
    /// conversation was reset sees a newer epoch and drops its reply
    /// instead of appending to the new transcript.
    epoch: AtomicU64,
}

impl ConversationSession {
    /// Create a session with the given gateway and event emitter.
    pub fn new(gateway: Arc<dyn RemoteGatewayPort>, emitter: Arc<dyn AppEventEmitter>) -> Self {
        Self {
            gateway,
            emitter,
            state: Mutex::new(None),
            epoch: AtomicU64::new(0),
        }
    }

    fn state(&self) -> MutexGuard<'_, Option<Conversation>> {
        self.state.lock().expect("conversation state lock poisoned")
    }

    /// Start a conversation about `book`, discarding any prior
    /// transcript.
    ///
    /// Synthesizes the opening user turn from the book's title and
    /// author, flips to sending, and issues the completion. Resolves to
    /// a snapshot of the conversation once the opening turn is
    /// answered; if another `start` superseded this one mid-flight the
    /// snapshot reflects the newer conversation instead.
    pub async fn start(&self, book: &Book) -> Conversation {
        let epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        let prompt = opening_prompt(&book.title, &book.author);
        tracing::debug!(book_id = book.id, "starting conversation");

        {
            let mut conversation = Conversation::new(book.id);
            conversation.turns.push(Turn::user(prompt.clone()));
            conversation.sending = true;
            *self.state() = Some(conversation);
        }
        self.emitter
            .emit(AppEvent::turn_appended(book.id, TurnRole::User));
        self.emitter.emit(AppEvent::sending_changed(book.id, true));

        self.complete_turn(epoch, book.id, &prompt).await;

        self.state()
            .clone()
            .unwrap_or_else(|| Conversation::new(book.id))
    }

    /// Send a user-typed message.
    ///
    /// The user turn is appended optimistically before the network
    /// call, so it is visible regardless of latency or failure. A send
    /// while a completion is in flight is rejected, not queued.
    pub async fn send(&self, text: &str) -> SendOutcome {
        let text = text.trim();
        if text.is_empty() {
            return SendOutcome::EmptyText;
        }

        let epoch = self.epoch.load(Ordering::SeqCst);
        let book_id = {
            let mut state = self.state();
            let Some(conversation) = state.as_mut() else {
                return SendOutcome::NotStarted;
            };
            if conversation.sending {
                return SendOutcome::Busy;
            }
            conversation.turns.push(Turn::user(text));
            conversation.sending = true;
            conversation.book_id
        };
        self.emitter
            .emit(AppEvent::turn_appended(book_id, TurnRole::User));
        self.emitter.emit(AppEvent::sending_changed(book_id, true));

        self.complete_turn(epoch, book_id, text).await;
        SendOutcome::Sent
    }

    /// Snapshot of the transcript.
    pub fn transcript(&self) -> Vec<Turn> {
        self.state()
            .as_ref()
            .map(|c| c.turns.clone())
            .unwrap_or_default()
    }

    /// Whether a completion is in flight.
    pub fn sending(&self) -> bool {
        self.state().as_ref().is_some_and(|c| c.sending)
    }

    /// Snapshot of the whole conversation, if one has been started.
    pub fn conversation(&self) -> Option<Conversation> {
        self.state().clone()
    }

    /// Book the current conversation is about.
    pub fn book_id(&self) -> Option<BookId> {
        self.state().as_ref().map(|c| c.book_id)
    }

    /// Resolve one completion and append exactly one assistant turn,
    /// unless the conversation was reset while the call was in flight.
    async fn complete_turn(&self, epoch: u64, book_id: BookId, text: &str) {
        let reply = match self.gateway.chat(book_id, text).await {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!(book_id, error = %err, "completion failed, rendering fallback turn");
                ASSISTANT_UNAVAILABLE_REPLY.to_string()
            }
        };

        if self.epoch.load(Ordering::SeqCst) != epoch {
            tracing::debug!(book_id, "conversation was reset, dropping late completion");
            return;
        }

        {
            let mut state = self.state();
            if let Some(conversation) = state.as_mut() {
                conversation.turns.push(Turn::assistant(reply));
                conversation.sending = false;
            }
        }
        self.emitter
            .emit(AppEvent::turn_appended(book_id, TurnRole::Assistant));
        self.emitter.emit(AppEvent::sending_changed(book_id, false));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::gateway::{GatewayError, MockRemoteGatewayPort};
    use crate::ports::NoopEmitter;

    fn book() -> Book {
        Book {
            id: 7,
            title: "Atomic Habits".to_string(),
            author: "James Clear".to_string(),
            isbn: "9780735211292".to_string(),
            price: 450.0,
            quantity: 3,
            about: None,
        }
    }

    fn session(gateway: MockRemoteGatewayPort) -> ConversationSession {
        ConversationSession::new(Arc::new(gateway), Arc::new(NoopEmitter))
    }

    #[tokio::test]
    async fn test_start_synthesizes_opening_turn() {
        let mut gateway = MockRemoteGatewayPort::new();
        gateway
            .expect_chat()
            .returning(|_, _| Ok("It is about building habits.".to_string()));
        let session = session(gateway);

        let conversation = session.start(&book()).await;

        assert_eq!(conversation.book_id, 7);
        assert!(!conversation.sending);
        assert_eq!(conversation.turns.len(), 2);
        assert_eq!(conversation.turns[0].role, TurnRole::User);
        // The synthesized prompt embeds title and author.
        assert!(conversation.turns[0].text.contains("Atomic Habits"));
        assert!(conversation.turns[0].text.contains("James Clear"));
        assert_eq!(conversation.turns[1].role, TurnRole::Assistant);
        assert_eq!(conversation.turns[1].text, "It is about building habits.");
    }

    #[tokio::test]
    async fn test_start_resets_prior_transcript() {
        let mut gateway = MockRemoteGatewayPort::new();
        gateway
            .expect_chat()
            .returning(|_, _| Ok("Sure.".to_string()));
        let session = session(gateway);

        session.start(&book()).await;
        session.send("Is it long?").await;
        assert_eq!(session.transcript().len(), 4);

        let conversation = session.start(&book()).await;
        assert_eq!(conversation.turns.len(), 2);
    }

    #[tokio::test]
    async fn test_send_alternates_turns_in_order() {
        let mut gateway = MockRemoteGatewayPort::new();
        gateway
            .expect_chat()
            .returning(|_, message| Ok(format!("You asked: {message}")));
        let session = session(gateway);

        session.start(&book()).await;
        let outcome = session.send("  Is it worth reading?  ").await;

        assert_eq!(outcome, SendOutcome::Sent);
        let turns = session.transcript();
        assert_eq!(turns.len(), 4);
        // Trimmed before appending and sending.
        assert_eq!(turns[2].text, "Is it worth reading?");
        assert_eq!(turns[3].text, "You asked: Is it worth reading?");
        assert!(!session.sending());
    }

    #[tokio::test]
    async fn test_send_rejects_empty_text() {
        let session = session(MockRemoteGatewayPort::new());
        assert_eq!(session.send("   ").await, SendOutcome::EmptyText);
        assert!(session.transcript().is_empty());
    }

    #[tokio::test]
    async fn test_send_before_start_is_rejected() {
        let session = session(MockRemoteGatewayPort::new());
        assert_eq!(session.send("hello").await, SendOutcome::NotStarted);
    }

    #[tokio::test]
    async fn test_completion_failure_becomes_fallback_turn() {
        let mut gateway = MockRemoteGatewayPort::new();
        let mut failed_once = false;
        gateway.expect_chat().returning(move |_, _| {
            if failed_once {
                Ok("Recovered.".to_string())
            } else {
                failed_once = true;
                Err(GatewayError::Network {
                    message: "timed out".to_string(),
                })
            }
        });
        let session = session(gateway);

        let conversation = session.start(&book()).await;
        assert_eq!(conversation.turns[1].text, ASSISTANT_UNAVAILABLE_REPLY);
        assert!(!conversation.sending);

        // The failed turn does not block the next send.
        assert_eq!(session.send("still there?").await, SendOutcome::Sent);
        let turns = session.transcript();
        assert_eq!(turns.len(), 4);
        assert_eq!(turns[3].text, "Recovered.");
    }
}
