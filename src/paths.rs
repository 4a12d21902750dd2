//! Project path functions - single source of truth for default file paths.
//!
//! ## Environment Variables
//!
//! - `DATA_DIR`: Override the base data directory (default: "data")
//!
//! Explicit paths from config.toml or `DATABASE_PATH` / `VOCABULARY_PATH`
//! take precedence (see config.rs).

use std::env;
use std::sync::OnceLock;

/// Lazily initialized data directory from DATA_DIR env var
static DATA_DIR_VALUE: OnceLock<String> = OnceLock::new();

/// Get the base data directory (from DATA_DIR env var or default "data")
pub fn data_dir() -> &'static str {
    DATA_DIR_VALUE.get_or_init(|| env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()))
}

/// SQLite database holding study progress
pub fn db_path() -> String {
    format!("{}/progress.db", data_dir())
}

/// Vocabulary sections file
pub fn vocabulary_path() -> String {
    format!("{}/list.json", data_dir())
}

/// Static assets served alongside the API - not under DATA_DIR
pub const STATIC_DIR: &str = "static";

#[cfg(test)]
mod tests {
    use super::*;

    // Note: We can't easily test env var override because OnceLock
    // initializes once. These tests verify the default behavior.

    #[test]
    fn test_data_dir_default() {
        let dir = data_dir();
        assert!(!dir.is_empty());
    }

    #[test]
    fn test_db_path_format() {
        assert!(db_path().ends_with("/progress.db"));
    }

    #[test]
    fn test_vocabulary_path_format() {
        assert!(vocabulary_path().ends_with("/list.json"));
    }
}
