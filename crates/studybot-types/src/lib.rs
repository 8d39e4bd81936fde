//! Shared domain types for Studybot.
//!
//! Users, conversation history entries, configuration, and the error types
//! shared by the core, infra, and api crates.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod user;
