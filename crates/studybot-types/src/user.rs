//! Registered user records.

use serde::{Deserialize, Serialize};

use std::fmt;

/// Unique identifier for a user, assigned by the store on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered user.
///
/// Created on registration and never modified or deleted afterwards.
/// `password_hash` is a PHC-format string; the plaintext password is never stored.
#[derive(Clone, Serialize)]
pub struct User {
    pub id: UserId,
    /// Unique, non-empty login name (trimmed).
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password_hash", &"[REDACTED]")
            .finish()
    }
}

/// Insert payload for a new user. The id is assigned by the store.
#[derive(Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("password_hash", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_display_and_serde() {
        let id = UserId(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
    }

    #[test]
    fn test_user_debug_redacts_hash() {
        let user = User {
            id: UserId(1),
            username: "alice".to_string(),
            password_hash: "$argon2id$v=19$secret".to_string(),
        };
        let debug = format!("{user:?}");
        assert!(debug.contains("alice"));
        assert!(!debug.contains("secret"));
    }

    #[test]
    fn test_user_serialize_skips_hash() {
        let user = User {
            id: UserId(7),
            username: "bob".to_string(),
            password_hash: "hash".to_string(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["username"], "bob");
        assert!(json.get("password_hash").is_none());
    }
}
