//! Keyword-matching responder.
//!
//! Maps free text to one canned reply with an ordered list of substring rules.
//! There is no tokenization, scoring, or state: the input is trimmed and
//! lowercased, then [`RULES`] is scanned once and the first matching rule
//! supplies the reply. Inputs matching nothing get [`FALLBACK_REPLY`].
//!
//! # Usage
//!
//! ```
//! use studybot_core::responder::{respond, FALLBACK_REPLY};
//!
//! assert_eq!(respond("Hello!"), "Hello 👋! How can I assist you today?");
//! assert_eq!(respond("zzz"), FALLBACK_REPLY);
//! ```

mod rules;

use serde::Serialize;

pub use rules::RULES;

/// Reply for empty or whitespace-only input.
pub const EMPTY_INPUT_REPLY: &str = "Please type a question so I can help you.";

/// Reply when no rule matches.
pub const FALLBACK_REPLY: &str =
    "I’m still learning. Could you ask in a different way or be more specific?";

/// Substring condition a rule fires on. Needles are lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "needles", rename_all = "lowercase")]
pub enum Trigger {
    /// Fires when at least one needle occurs in the input.
    Any(&'static [&'static str]),
    /// Fires only when every needle occurs in the input.
    All(&'static [&'static str]),
}

impl Trigger {
    /// Test the trigger against already-normalized text.
    pub fn matches(&self, normalized: &str) -> bool {
        match self {
            Trigger::Any(needles) => needles.iter().any(|n| normalized.contains(n)),
            Trigger::All(needles) => needles.iter().all(|n| normalized.contains(n)),
        }
    }

    pub fn needles(&self) -> &'static [&'static str] {
        match self {
            Trigger::Any(needles) | Trigger::All(needles) => needles,
        }
    }
}

/// A (trigger, reply) pair in the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rule {
    /// Short human-readable label, used by `studybot rules`.
    pub topic: &'static str,
    pub trigger: Trigger,
    pub reply: &'static str,
}

/// The full rule table in evaluation order.
pub fn rules() -> &'static [Rule] {
    RULES
}

/// Trim surrounding whitespace and lowercase.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Return the first rule matching `text`, if any.
///
/// Empty input matches nothing.
pub fn matching_rule(text: &str) -> Option<&'static Rule> {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return None;
    }
    RULES.iter().find(|rule| rule.trigger.matches(&normalized))
}

/// Produce the reply for `text`. Total over all inputs.
pub fn respond(text: &str) -> &'static str {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return EMPTY_INPUT_REPLY;
    }
    RULES
        .iter()
        .find(|rule| rule.trigger.matches(&normalized))
        .map(|rule| rule.reply)
        .unwrap_or(FALLBACK_REPLY)
}
