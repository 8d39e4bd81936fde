//! User repository trait definition.

use studybot_types::error::RepositoryError;
use studybot_types::user::{NewUser, User};

/// Repository trait for user persistence.
///
/// Implementations live in studybot-infra (e.g., SqliteUserRepository).
/// Usernames are unique: `create` must return `RepositoryError::Conflict`
/// when the store rejects a duplicate, and must not leave a second row behind.
pub trait UserRepository: Send + Sync {
    /// Insert a new user. Returns the stored user with its assigned id.
    fn create(
        &self,
        user: &NewUser,
    ) -> impl std::future::Future<Output = Result<User, RepositoryError>> + Send;

    /// Look up a user by exact username.
    fn get_by_username(
        &self,
        username: &str,
    ) -> impl std::future::Future<Output = Result<Option<User>, RepositoryError>> + Send;

    /// List all users ordered by id.
    fn list(&self) -> impl std::future::Future<Output = Result<Vec<User>, RepositoryError>> + Send;
}
