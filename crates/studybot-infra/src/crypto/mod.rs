//! Cryptographic operations for Studybot.
//!
//! - `password`: Argon2id password hashing for stored credentials
//! - `session_key`: session-cookie signing key derived from the secret key

pub mod password;
pub mod session_key;
