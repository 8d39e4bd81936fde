//! Registration and login.
//!
//! AuthService validates credentials, hashes new passwords, and relies on the
//! store's unique constraint to reject duplicate usernames (so concurrent
//! registrations of the same name resolve to exactly one row).

use studybot_types::error::{AuthError, RepositoryError};
use studybot_types::user::{NewUser, User};
use tracing::{info, warn};

use crate::repository::user::UserRepository;
use crate::service::hash::PasswordHasher;

/// Service orchestrating user registration and authentication.
///
/// Generic over repository and hasher traits to maintain clean
/// architecture -- studybot-core never depends on studybot-infra.
pub struct AuthService<U: UserRepository, H: PasswordHasher> {
    user_repo: U,
    hasher: H,
}

impl<U: UserRepository, H: PasswordHasher> AuthService<U, H> {
    pub fn new(user_repo: U, hasher: H) -> Self {
        Self { user_repo, hasher }
    }

    /// Register a new user.
    ///
    /// The username is trimmed; the password is stored (hashed) exactly as
    /// given. A blank username or password is rejected before touching the store.
    pub async fn register(&self, username: &str, password: &str) -> Result<User, AuthError> {
        let username = username.trim();
        if username.is_empty() || password.trim().is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let password_hash = self.hasher.hash(password)?;
        let new_user = NewUser {
            username: username.to_string(),
            password_hash,
        };

        match self.user_repo.create(&new_user).await {
            Ok(user) => {
                info!(user_id = %user.id, username = %user.username, "registered user");
                Ok(user)
            }
            Err(RepositoryError::Conflict(_)) => {
                warn!(username, "registration rejected: username taken");
                Err(AuthError::UsernameTaken(username.to_string()))
            }
            Err(other) => Err(AuthError::StorageError(other.to_string())),
        }
    }

    /// Authenticate a user by username and password.
    ///
    /// Unknown usernames and wrong passwords both yield
    /// `AuthError::InvalidCredentials`.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, AuthError> {
        let username = username.trim();

        let user = self
            .user_repo
            .get_by_username(username)
            .await
            .map_err(|e| AuthError::StorageError(e.to_string()))?;

        match user {
            Some(user) if self.hasher.verify(password, &user.password_hash) => {
                info!(user_id = %user.id, "login succeeded");
                Ok(user)
            }
            _ => {
                warn!(username, "login failed");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// List every registered user, ordered by id.
    pub async fn list_users(&self) -> Result<Vec<User>, AuthError> {
        self.user_repo
            .list()
            .await
            .map_err(|e| AuthError::StorageError(e.to_string()))
    }
}
