//! Conversation state owned by the chat view.
//!
//! Every UI event maps to one method on [`ConversationState`]; none of them
//! perform I/O, so the whole view can be driven and inspected in tests.

use std::collections::VecDeque;

use serde::{Deserialize, Deserializer, Serialize};
use stylux_core::types::Message;

/// How many recent queries the sidebar keeps.
pub const RECENT_QUERY_LIMIT: usize = 5;

/// Sidebar labels are cut to this many characters.
const LABEL_MAX_CHARS: usize = 30;

/// Sidebar label shown when there are no recent queries.
pub const NO_RECENT_QUERIES: &str = "No recent queries";

/// Everything the chat view renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationState {
    /// Exchanged messages in display order.
    log: Vec<Message>,
    /// Raw user texts, most recent first.
    #[serde(deserialize_with = "deserialize_recent_queries")]
    recent_queries: VecDeque<String>,
    /// Contents of the input field.
    pending_input: String,
    sidebar_open: bool,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> &[Message] {
        &self.log
    }

    pub fn recent_queries(&self) -> impl Iterator<Item = &str> {
        self.recent_queries.iter().map(String::as_str)
    }

    pub fn recent_query_count(&self) -> usize {
        self.recent_queries.len()
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// Replace the input field contents (a keystroke).
    pub fn set_pending_input(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
    }

    /// Record a user submission.
    ///
    /// Blank text is ignored and leaves every field untouched. Otherwise the
    /// message is logged, the raw text becomes the newest recent query and
    /// the input field is cleared. Returns the logged message.
    pub fn submit_user_text(&mut self, text: &str) -> Option<&Message> {
        if text.trim().is_empty() {
            return None;
        }
        self.recent_queries.push_front(text.to_string());
        self.recent_queries.truncate(RECENT_QUERY_LIMIT);
        self.pending_input.clear();
        self.log.push(Message::user(text));
        self.log.last()
    }

    /// Submit whatever is in the input field (Enter or the Generate button).
    pub fn submit_pending(&mut self) -> Option<&Message> {
        let text = std::mem::take(&mut self.pending_input);
        if text.trim().is_empty() {
            self.pending_input = text;
            return None;
        }
        self.submit_user_text(&text)
    }

    pub fn append_bot_reply(&mut self, text: impl Into<String>) -> &Message {
        self.log.push(Message::bot(text));
        &self.log[self.log.len() - 1]
    }

    /// Copy a recent query back into the input field without submitting it.
    pub fn select_recent_query(&mut self, text: &str) {
        self.pending_input = text.to_string();
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Labels for the recent-queries sidebar, newest first.
    pub fn recent_query_labels(&self) -> Vec<String> {
        if self.recent_queries.is_empty() {
            return vec![NO_RECENT_QUERIES.to_string()];
        }
        self.recent_queries.iter().map(|q| shorten(q)).collect()
    }
}

/// Keeps only the newest [`RECENT_QUERY_LIMIT`] entries of a loaded list.
fn deserialize_recent_queries<'de, D>(deserializer: D) -> Result<VecDeque<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let mut queries = VecDeque::<String>::deserialize(deserializer)?;
    queries.truncate(RECENT_QUERY_LIMIT);
    Ok(queries)
}

fn shorten(text: &str) -> String {
    match text.char_indices().nth(LABEL_MAX_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
