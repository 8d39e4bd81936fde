//! PasswordHasher trait for storing and checking credentials.
//!
//! Defined in studybot-core so the auth service can hash passwords without
//! coupling to a specific algorithm. The `Argon2PasswordHasher` adapter lives
//! in studybot-infra.

use studybot_types::error::AuthError;

/// Abstraction over one-way password hashing.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password into a self-describing string (salt included).
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Check a plaintext password against a stored hash.
    ///
    /// A malformed stored hash verifies as `false`.
    fn verify(&self, password: &str, stored_hash: &str) -> bool;
}
