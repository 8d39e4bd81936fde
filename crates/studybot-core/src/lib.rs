//! Business logic and repository trait definitions for Studybot.
//!
//! This crate defines the "ports" (repository and hasher traits) that the
//! infrastructure layer implements, plus the pure pieces: the keyword
//! responder and the conversation log. It depends only on `studybot-types`
//! -- never on `studybot-infra` or any database/IO crate.

pub mod chat;
pub mod repository;
pub mod responder;
pub mod service;
