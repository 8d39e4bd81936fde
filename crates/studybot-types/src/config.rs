//! Application configuration types for Studybot.
//!
//! `AppConfig` represents the optional `config.toml` in the data directory.
//! Every field has a default, so an empty or missing file is valid.

use serde::{Deserialize, Serialize};

/// Secret used to sign session cookies when nothing else is configured.
///
/// Insecure on purpose: it lets the app start without setup, and startup
/// logs a warning whenever it is in effect.
pub const DEFAULT_SECRET_KEY: &str = "dev_secret_key_change_me";

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Session signing secret. Overridden by the `SECRET_KEY` env var.
    #[serde(default)]
    pub secret_key: Option<String>,

    /// Interface the HTTP server binds to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port the HTTP server binds to.
    #[serde(default = "default_port")]
    pub port: u16,

    /// SQLite file name, relative to the data directory unless absolute.
    #[serde(default = "default_database_file")]
    pub database_file: String,

    /// Mark the session cookie `Secure` (HTTPS only).
    #[serde(default)]
    pub secure_cookies: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_database_file() -> String {
    "studybot.db".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            secret_key: None,
            host: default_host(),
            port: default_port(),
            database_file: default_database_file(),
            secure_cookies: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_default_values() {
        let config = AppConfig::default();
        assert!(config.secret_key.is_none());
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5000);
        assert_eq!(config.database_file, "studybot.db");
        assert!(!config.secure_cookies);
    }

    #[test]
    fn test_app_config_deserialize_with_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.port, 5000);
        assert!(config.secret_key.is_none());
    }

    #[test]
    fn test_app_config_deserialize_with_values() {
        let toml_str = r#"
secret_key = "s3cret"
host = "0.0.0.0"
port = 8080
database_file = "/var/lib/studybot/users.db"
secure_cookies = true
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.secret_key.as_deref(), Some("s3cret"));
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.database_file, "/var/lib/studybot/users.db");
        assert!(config.secure_cookies);
    }
}
