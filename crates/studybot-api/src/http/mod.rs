//! Web layer for Studybot.
//!
//! Axum server rendering HTML pages, with signed session cookies, flash
//! messages, and a per-request session context.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod templates;

#[cfg(test)]
mod tests;
