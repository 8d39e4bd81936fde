//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by both the CLI and the
//! web handlers. Services are generic over repository/hasher traits, but
//! AppState pins them to the concrete infra implementations.

use std::path::PathBuf;
use std::sync::Arc;

use minijinja::Environment;
use tower_sessions::cookie::Key;

use studybot_core::service::auth::AuthService;
use studybot_infra::config::{
    database_path, load_config, resolve_data_dir, resolve_secret_key, SecretSource,
};
use studybot_infra::crypto::password::Argon2PasswordHasher;
use studybot_infra::crypto::session_key::derive_session_key;
use studybot_infra::session_store::EphemeralSessionStore;
use studybot_infra::sqlite::pool::DatabasePool;
use studybot_infra::sqlite::user::SqliteUserRepository;
use studybot_types::config::AppConfig;

use crate::http::templates;

/// Concrete type alias for the auth service pinned to infra implementations.
pub type ConcreteAuthService = AuthService<SqliteUserRepository, Argon2PasswordHasher>;

/// Shared application state holding all services.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<ConcreteAuthService>,
    pub templates: Arc<Environment<'static>>,
    pub config: Arc<AppConfig>,
    /// Signing key for the session cookie.
    pub session_key: Key,
    /// Server-side session records, held for the life of the process.
    pub session_store: EphemeralSessionStore,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Initialize the application state: load config, connect to DB, wire services.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();

        // Ensure data directory exists
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_config(&data_dir).await;

        let (secret, source) = resolve_secret_key(&config);
        if source == SecretSource::InsecureDefault {
            tracing::warn!(
                "SECRET_KEY is not set; session cookies are signed with the insecure development default"
            );
        }

        let db_path = database_path(&data_dir, &config);
        let db_pool = DatabasePool::open(&db_path).await?;
        tracing::info!(path = %db_path.display(), "database ready");

        Self::from_parts(db_pool, config, &secret, data_dir)
    }

    /// Wire services around an already-open pool.
    pub fn from_parts(
        db_pool: DatabasePool,
        config: AppConfig,
        secret: &str,
        data_dir: PathBuf,
    ) -> anyhow::Result<Self> {
        let auth_service = AuthService::new(
            SqliteUserRepository::new(db_pool),
            Argon2PasswordHasher::new(),
        );

        let templates = templates::build_environment()?;
        let session_key = Key::from(derive_session_key(secret).as_slice());

        Ok(Self {
            auth_service: Arc::new(auth_service),
            templates: Arc::new(templates),
            config: Arc::new(config),
            session_key,
            session_store: EphemeralSessionStore::new(),
            data_dir,
        })
    }
}
