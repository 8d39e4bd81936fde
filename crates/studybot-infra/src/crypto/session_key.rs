//! Session-cookie signing key material.
//!
//! Cookie signing needs 64 bytes of key material, while the configured secret
//! is an arbitrary string. SHA-512 of the secret gives exactly 64 bytes, so any
//! secret (including the short development default) yields a valid key, and
//! the same secret always yields the same key across restarts.

use sha2::{Digest, Sha512};

/// Length of the derived key in bytes.
pub const SESSION_KEY_LEN: usize = 64;

/// Derive signing key bytes from the configured secret key.
pub fn derive_session_key(secret: &str) -> [u8; SESSION_KEY_LEN] {
    let digest = Sha512::digest(secret.as_bytes());
    let mut key = [0u8; SESSION_KEY_LEN];
    key.copy_from_slice(&digest);
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivation_is_deterministic() {
        assert_eq!(derive_session_key("abc"), derive_session_key("abc"));
    }

    #[test]
    fn test_different_secrets_give_different_keys() {
        assert_ne!(derive_session_key("abc"), derive_session_key("abd"));
    }

    #[test]
    fn test_empty_secret_still_yields_full_key() {
        let key = derive_session_key("");
        assert_eq!(key.len(), SESSION_KEY_LEN);
        assert!(key.iter().any(|b| *b != 0));
    }
}
