//! Conversation history entries kept in a signed-in user's session.

use serde::{Deserialize, Serialize};

use std::fmt;

/// Who authored a history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Bot,
}

impl Speaker {
    /// Label shown next to the entry in the chat transcript.
    pub fn label(&self) -> &'static str {
        match self {
            Speaker::User => "You",
            Speaker::Bot => "Bot",
        }
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speaker::User => write!(f, "user"),
            Speaker::Bot => write!(f, "bot"),
        }
    }
}

/// One line of the conversation transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub speaker: Speaker,
    pub text: String,
}

impl HistoryEntry {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Bot,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speaker_display_matches_serde() {
        for speaker in [Speaker::User, Speaker::Bot] {
            let json = serde_json::to_string(&speaker).unwrap();
            assert_eq!(json, format!("\"{speaker}\""));
        }
    }

    #[test]
    fn test_speaker_labels() {
        assert_eq!(Speaker::User.label(), "You");
        assert_eq!(Speaker::Bot.label(), "Bot");
    }

    #[test]
    fn test_history_entry_serde() {
        let entry = HistoryEntry::user("hello");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"speaker":"user","text":"hello"}"#);
        let back: HistoryEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
