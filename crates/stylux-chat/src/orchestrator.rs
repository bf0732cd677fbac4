//! Chat session: drives submit -> resolve -> append for one view.
//!
//! Turns are serialized, so a user message and its bot reply always sit
//! next to each other in the log even when callers race. A reset bumps the
//! session generation; replies that resolve for an older generation are
//! dropped instead of being appended to the fresh conversation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use stylux_core::types::Message;
use uuid::Uuid;

use crate::resolver::ReplyResolver;
use crate::session::ConversationState;

/// One chat view's conversation plus the resolver answering it.
pub struct ChatSession {
    id: Uuid,
    state: Mutex<ConversationState>,
    resolver: Arc<dyn ReplyResolver>,
    turn_gate: tokio::sync::Mutex<()>,
    generation: AtomicU64,
}

impl ChatSession {
    pub fn new(resolver: Arc<dyn ReplyResolver>) -> Self {
        Self {
            id: Uuid::new_v4(),
            state: Mutex::new(ConversationState::new()),
            resolver,
            turn_gate: tokio::sync::Mutex::new(()),
            generation: AtomicU64::new(0),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// A copy of the current view state.
    pub fn snapshot(&self) -> ConversationState {
        self.lock_state().clone()
    }

    /// Apply a synchronous UI event (typing, selecting a recent query,
    /// toggling the sidebar) to the state.
    pub fn update<R>(&self, event: impl FnOnce(&mut ConversationState) -> R) -> R {
        event(&mut *self.lock_state())
    }

    /// Submit `text` and wait for the bot reply.
    ///
    /// Returns the appended bot message, or `None` when the text was blank
    /// or the session was reset while the reply was in flight.
    pub async fn submit(&self, text: &str) -> Option<Message> {
        self.run_turn(|state| state.submit_user_text(text).map(|m| m.text().to_string()))
            .await
    }

    /// Submit the contents of the input field.
    pub async fn submit_pending(&self) -> Option<Message> {
        self.run_turn(|state| state.submit_pending().map(|m| m.text().to_string()))
            .await
    }

    /// Tear the conversation down. In-flight replies are discarded on arrival.
    pub fn reset(&self) {
        let mut state = self.lock_state();
        let previous = self.generation.fetch_add(1, Ordering::SeqCst);
        *state = ConversationState::new();
        tracing::debug!(session = %self.id, generation = previous + 1, "Session reset");
    }

    async fn run_turn<F>(&self, record: F) -> Option<Message>
    where
        F: FnOnce(&mut ConversationState) -> Option<String>,
    {
        let _turn = self.turn_gate.lock().await;

        let (text, generation) = {
            let mut state = self.lock_state();
            let Some(text) = record(&mut *state) else {
                tracing::debug!(session = %self.id, "Ignoring blank submission");
                return None;
            };
            (text, self.generation.load(Ordering::SeqCst))
        };

        tracing::debug!(
            session = %self.id,
            resolver = self.resolver.name(),
            len = text.len(),
            "Resolving reply"
        );
        let reply = self.resolver.resolve(&text).await;

        let mut state = self.lock_state();
        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(session = %self.id, "Dropping reply for a reset session");
            return None;
        }
        Some(state.append_bot_reply(reply).clone())
    }

    fn lock_state(&self) -> MutexGuard<'_, ConversationState> {
        self.state.lock().unwrap_or_else(|poisoned| {
            tracing::error!(session = %self.id, "Conversation state lock poisoned");
            poisoned.into_inner()
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
