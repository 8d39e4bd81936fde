//! Configuration loader for Studybot.
//!
//! Reads `config.toml` from the data directory (`~/.studybot/` in production)
//! and deserializes it into [`AppConfig`]. Falls back to defaults when the
//! file is missing or malformed. The session secret is resolved separately so
//! the `SECRET_KEY` environment variable always wins.

use std::path::{Path, PathBuf};

use studybot_types::config::{AppConfig, DEFAULT_SECRET_KEY};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "STUDYBOT_DATA_DIR";

/// Environment variable holding the session signing secret.
pub const SECRET_KEY_ENV: &str = "SECRET_KEY";

/// Where the session secret came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretSource {
    Environment,
    ConfigFile,
    InsecureDefault,
}

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `STUDYBOT_DATA_DIR` environment variable
/// 2. `~/.studybot`
/// 3. `.studybot` in the current directory
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".studybot");
    }

    PathBuf::from(".studybot")
}

/// Load configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`AppConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and returns the default.
pub async fn load_config(data_dir: &Path) -> AppConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return AppConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return AppConfig::default();
        }
    };

    match toml::from_str::<AppConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            AppConfig::default()
        }
    }
}

/// Resolve the session signing secret.
///
/// Priority:
/// 1. `SECRET_KEY` environment variable (when non-empty)
/// 2. `secret_key` in `config.toml` (when non-empty)
/// 3. [`DEFAULT_SECRET_KEY`]
pub fn resolve_secret_key(config: &AppConfig) -> (String, SecretSource) {
    resolve_secret_key_from(std::env::var(SECRET_KEY_ENV).ok(), config)
}

fn resolve_secret_key_from(env_value: Option<String>, config: &AppConfig) -> (String, SecretSource) {
    if let Some(secret) = env_value.filter(|s| !s.is_empty()) {
        return (secret, SecretSource::Environment);
    }
    if let Some(secret) = config.secret_key.as_ref().filter(|s| !s.is_empty()) {
        return (secret.clone(), SecretSource::ConfigFile);
    }
    (DEFAULT_SECRET_KEY.to_string(), SecretSource::InsecureDefault)
}

/// Resolve the SQLite file path; relative names live under the data directory.
pub fn database_path(data_dir: &Path, config: &AppConfig) -> PathBuf {
    let file = Path::new(&config.database_file);
    if file.is_absolute() {
        file.to_path_buf()
    } else {
        data_dir.join(file)
    }
}
