//! Ordered transcript of one signed-in session.
//!
//! The log lives inside the session record, so it is serde-serializable as a
//! plain array of entries. It is emptied on login and logout and otherwise only
//! grows.

use serde::{Deserialize, Serialize};
use studybot_types::chat::HistoryEntry;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationLog {
    entries: Vec<HistoryEntry>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the user's message followed by the bot's reply.
    pub fn record_turn(&mut self, user_text: impl Into<String>, reply: impl Into<String>) {
        self.entries.push(HistoryEntry::user(user_text));
        self.entries.push(HistoryEntry::bot(reply));
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
