use thiserror::Error;

/// Errors from registration and login.
///
/// Login failures collapse into `InvalidCredentials` regardless of whether the
/// username exists, so callers cannot tell the two cases apart.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("username and password are both required")]
    MissingCredentials,

    #[error("username '{0}' is already taken")]
    UsernameTaken(String),

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("password hashing failed")]
    Hashing,

    #[error("storage error: {0}")]
    StorageError(String),
}

/// Errors from repository operations (used by trait definitions in studybot-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("query error: {0}")]
    Query(String),

    #[error("conflict: {0}")]
    Conflict(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_display() {
        let err = AuthError::UsernameTaken("alice".to_string());
        assert_eq!(err.to_string(), "username 'alice' is already taken");
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "invalid username or password"
        );
    }

    #[test]
    fn test_repository_error_display() {
        let err = RepositoryError::Query("syntax error".to_string());
        assert_eq!(err.to_string(), "query error: syntax error");
        let err = RepositoryError::Conflict("username 'a' already exists".to_string());
        assert_eq!(err.to_string(), "conflict: username 'a' already exists");
    }
}
