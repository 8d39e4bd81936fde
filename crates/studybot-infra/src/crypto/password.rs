//! Argon2id password hashing.
//!
//! Implements the `PasswordHasher` trait from `studybot-core` with the
//! `argon2` crate (RustCrypto ecosystem). Hashes are PHC strings
//! (`$argon2id$v=19$m=...,t=...,p=...$salt$hash`) so the salt and parameters
//! travel with the hash.
//!
//! SECURITY: Errors and logs never include the plaintext password.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, SaltString};
use argon2::{Argon2, PasswordHasher as _, PasswordVerifier as _};

use studybot_core::service::hash::PasswordHasher;
use studybot_types::error::AuthError;

/// Argon2id implementation of `PasswordHasher` with the crate's default
/// (OWASP-aligned) parameters and a fresh random salt per hash.
#[derive(Default)]
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|_| AuthError::Hashing)
    }

    fn verify(&self, password: &str, stored_hash: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(stored_hash) else {
            tracing::warn!("stored password hash is not a valid PHC string");
            return false;
        };
        self.argon2
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}
