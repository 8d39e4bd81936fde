//! Infrastructure layer for Studybot.
//!
//! Contains implementations of the traits defined in `studybot-core`:
//! SQLite user storage, Argon2 password hashing, plus configuration loading,
//! session-key derivation, and the in-process session store.

pub mod config;
pub mod crypto;
pub mod session_store;
pub mod sqlite;
