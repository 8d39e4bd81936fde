//! One chat turn: ask the responder, record both sides in the log.

use tracing::debug;

use crate::chat::log::ConversationLog;
use crate::responder;

/// Handle a submitted chat message against the session's log.
///
/// The message is trimmed first. A blank submission is ignored and leaves the
/// log untouched (`None`); otherwise the reply is computed, the turn is recorded,
/// and the reply is returned.
pub fn handle_message(log: &mut ConversationLog, message: &str) -> Option<&'static str> {
    let message = message.trim();
    if message.is_empty() {
        return None;
    }

    let reply = responder::respond(message);
    log.record_turn(message, reply);
    debug!(history_len = log.len(), "recorded chat turn");
    Some(reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use studybot_types::chat::{HistoryEntry, Speaker};

    #[test]
    fn test_hello_turn_produces_two_entries() {
        let mut log = ConversationLog::new();
        let reply = handle_message(&mut log, "hello").unwrap();

        assert_eq!(reply, "Hello 👋! How can I assist you today?");
        assert_eq!(
            log.entries(),
            &[HistoryEntry::user("hello"), HistoryEntry::bot(reply)]
        );
    }

    #[test]
    fn test_blank_message_is_ignored() {
        let mut log = ConversationLog::new();
        assert!(handle_message(&mut log, "   ").is_none());
        assert!(handle_message(&mut log, "").is_none());
        assert!(log.is_empty());
    }

    #[test]
    fn test_message_is_trimmed_before_recording() {
        let mut log = ConversationLog::new();
        handle_message(&mut log, "  python  ");
        assert_eq!(log.entries()[0].text, "python");
        assert_eq!(log.entries()[0].speaker, Speaker::User);
    }

    #[test]
    fn test_history_accumulates_across_turns() {
        let mut log = ConversationLog::new();
        handle_message(&mut log, "hello");
        handle_message(&mut log, "zzz");
        assert_eq!(log.len(), 4);
        assert_eq!(log.entries()[3].text, responder::FALLBACK_REPLY);
    }
}
