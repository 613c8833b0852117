//! Per-session conversation state.
//!
//! The gateway owns all conversational memory: history is keyed by an
//! explicit session key and passed to the model each turn, never held
//! inside a long-lived model client. The window is capped so the prompt
//! stays bounded.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use playcove_interaction::ChatTurn;

/// Maximum turns retained per session; older turns fall off the front.
const HISTORY_WINDOW: usize = 20;

/// In-memory cache of conversation histories, keyed by session key.
#[derive(Default)]
pub struct ConversationCache {
    sessions: Arc<RwLock<HashMap<String, Vec<ChatTurn>>>>,
}

impl ConversationCache {
    /// Creates a new empty ConversationCache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the retained history for a session key (empty when unseen).
    pub async fn history(&self, session_key: &str) -> Vec<ChatTurn> {
        let sessions = self.sessions.read().await;
        sessions.get(session_key).cloned().unwrap_or_default()
    }

    /// Appends turns to a session's history, trimming to the window.
    pub async fn append(&self, session_key: &str, turns: impl IntoIterator<Item = ChatTurn>) {
        let mut sessions = self.sessions.write().await;
        let history = sessions.entry(session_key.to_string()).or_default();
        history.extend(turns);
        if history.len() > HISTORY_WINDOW {
            let excess = history.len() - HISTORY_WINDOW;
            history.drain(..excess);
        }
    }

    /// Drops a session's history.
    pub async fn clear(&self, session_key: &str) {
        let mut sessions = self.sessions.write().await;
        sessions.remove(session_key);
    }
}
