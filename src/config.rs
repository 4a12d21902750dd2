//! Application configuration.
//!
//! Values are resolved with priority: config.toml > environment (.env) >
//! built-in defaults.

use serde::Deserialize;
use std::path::PathBuf;

use crate::paths;

// ==================== Server Configuration ====================

/// Server address to bind to
pub const SERVER_ADDR: &str = "0.0.0.0";

/// Server port
pub const SERVER_PORT: u16 = 3000;

// ==================== Session Configuration ====================

/// Progress is stored under this session id unless configured otherwise
pub const DEFAULT_SESSION_ID: &str = "default";

/// Quiz sessions expire after this many hours of inactivity
pub const QUIZ_EXPIRY_HOURS: i64 = 2;

/// Probability threshold for quiz cleanup (0-255, lower = more frequent)
/// Value of 25 means ~10% chance (25/256) on each quiz access
pub const QUIZ_CLEANUP_THRESHOLD: u8 = 25;

/// Config file location, relative to the working directory
pub const CONFIG_FILE: &str = "config.toml";

// ==================== config.toml ====================

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    database: Option<DatabaseConfig>,
    vocabulary: Option<VocabularyConfig>,
    server: Option<ServerConfig>,
    session: Option<SessionConfig>,
}

#[derive(Debug, Deserialize)]
struct DatabaseConfig {
    path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VocabularyConfig {
    path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ServerConfig {
    addr: Option<String>,
    port: Option<u16>,
}

#[derive(Debug, Deserialize)]
struct SessionConfig {
    id: Option<String>,
}

/// Resolved runtime settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub database_path: PathBuf,
    pub vocabulary_path: PathBuf,
    pub server_addr: String,
    pub server_port: u16,
    pub session_id: String,
}

impl Settings {
    /// Load settings from config.toml, the process environment and .env
    pub fn load() -> Self {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        let toml = std::fs::read_to_string(CONFIG_FILE).ok();
        Self::resolve(toml.as_deref(), |key| std::env::var(key).ok())
    }

    /// Resolve settings from an optional config.toml body and an environment lookup
    pub fn resolve(toml_source: Option<&str>, env: impl Fn(&str) -> Option<String>) -> Self {
        let file = toml_source
            .and_then(|contents| match toml::from_str::<FileConfig>(contents) {
                Ok(config) => Some(config),
                Err(e) => {
                    tracing::warn!("Ignoring invalid {}: {}", CONFIG_FILE, e);
                    None
                }
            })
            .unwrap_or_default();

        let database_path = file
            .database
            .and_then(|d| d.path)
            .or_else(|| env("DATABASE_PATH"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(paths::db_path()));

        let vocabulary_path = file
            .vocabulary
            .and_then(|v| v.path)
            .or_else(|| env("VOCABULARY_PATH"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(paths::vocabulary_path()));

        let (file_addr, file_port) = file
            .server
            .map(|s| (s.addr, s.port))
            .unwrap_or((None, None));

        let server_addr = file_addr
            .or_else(|| env("SERVER_ADDR"))
            .unwrap_or_else(|| SERVER_ADDR.to_string());

        let server_port = file_port
            .or_else(|| env("PORT").and_then(|p| p.parse().ok()))
            .unwrap_or(SERVER_PORT);

        let session_id = file
            .session
            .and_then(|s| s.id)
            .or_else(|| env("SESSION_ID"))
            .unwrap_or_else(|| DEFAULT_SESSION_ID.to_string());

        Self {
            database_path,
            vocabulary_path,
            server_addr,
            server_port,
            session_id,
        }
    }

    /// Get the full server bind address
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server_addr, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::resolve(None, env_from(&[]));
        assert!(settings.database_path.ends_with("progress.db"));
        assert!(settings.vocabulary_path.ends_with("list.json"));
        assert_eq!(settings.server_port, SERVER_PORT);
        assert_eq!(settings.session_id, DEFAULT_SESSION_ID);
        assert_eq!(settings.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_env_overrides_defaults() {
        let settings = Settings::resolve(
            None,
            env_from(&[("DATABASE_PATH", "/tmp/a.db"), ("PORT", "4000"), ("SESSION_ID", "me")]),
        );
        assert_eq!(settings.database_path, PathBuf::from("/tmp/a.db"));
        assert_eq!(settings.server_port, 4000);
        assert_eq!(settings.session_id, "me");
    }

    #[test]
    fn test_config_file_wins_over_env() {
        let toml = r#"
            [database]
            path = "/srv/vocab.db"

            [vocabulary]
            path = "/srv/list.json"

            [server]
            port = 8080
        "#;
        let settings = Settings::resolve(
            Some(toml),
            env_from(&[("DATABASE_PATH", "/tmp/a.db"), ("PORT", "4000")]),
        );
        assert_eq!(settings.database_path, PathBuf::from("/srv/vocab.db"));
        assert_eq!(settings.vocabulary_path, PathBuf::from("/srv/list.json"));
        assert_eq!(settings.server_port, 8080);
    }

    #[test]
    fn test_invalid_port_and_toml_fall_back() {
        let settings = Settings::resolve(Some("not = [valid"), env_from(&[("PORT", "abc")]));
        assert_eq!(settings.server_port, SERVER_PORT);
    }
}
