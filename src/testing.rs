//! Test utilities for database setup.
//!
//! Provides helpers that reuse the authoritative schema initialization,
//! eliminating schema duplication in test code.

use rusqlite::Connection;
use tempfile::TempDir;

use crate::domain::{Section, Vocabulary, VocabularyData};

/// Test environment with an on-disk progress database in a temporary directory.
///
/// The directory is removed automatically when dropped.
pub struct TestEnv {
    /// Temporary directory (kept alive for database file persistence)
    pub temp: TempDir,
    /// Connection with the full schema applied
    pub conn: Connection,
}

impl TestEnv {
    pub fn new() -> rusqlite::Result<Self> {
        let temp =
            TempDir::new().map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        let conn = Connection::open(temp.path().join("progress.db"))?;
        crate::db::run_migrations(&conn)?;

        Ok(Self { temp, conn })
    }
}

/// Minimal vocabulary entry
pub fn vocab(word: &str) -> Vocabulary {
    Vocabulary {
        word: word.to_string(),
        pos: "n.".to_string(),
        definition: format!("meaning of {}", word),
        examples: None,
        notes: None,
        derivatives: None,
        antonyms: None,
        synonyms: None,
        distinctions: None,
    }
}

/// Two small sections for handler and service tests
pub fn sample_vocabulary() -> VocabularyData {
    VocabularyData {
        sections: vec![
            Section {
                title: "Unit 1".to_string(),
                vocabulary: vec![vocab("abate"), vocab("bolster"), vocab("cajole")],
            },
            Section {
                title: "Unit 2".to_string(),
                vocabulary: vec![vocab("dearth"), vocab("enervate")],
            },
        ],
    }
}
