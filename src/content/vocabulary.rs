//! Vocabulary file loading - reads sections and words from list.json.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::domain::VocabularyData;

/// Vocabulary loading errors.
#[derive(Debug, Error)]
pub enum VocabularyLoadError {
    #[error("Vocabulary file not found: {0}")]
    FileNotFound(String),
    #[error("IO error reading {0}: {1}")]
    IoError(String, String),
    #[error("Parse error in {0}: {1}")]
    ParseError(String, String),
    #[error("No sections found in {0}")]
    NoSections(String),
}

impl VocabularyLoadError {
    /// Returns a user-facing error message without exposing filesystem paths.
    pub fn user_message(&self) -> &'static str {
        match self {
            VocabularyLoadError::FileNotFound(_) => "Vocabulary file not found",
            VocabularyLoadError::IoError(_, _) => "Failed to read vocabulary file",
            VocabularyLoadError::ParseError(_, _) => "Vocabulary file is not correctly formatted",
            VocabularyLoadError::NoSections(_) => "No sections found. Please add your vocabulary data.",
        }
    }
}

/// Parse vocabulary JSON, rejecting documents without sections.
pub fn parse_vocabulary(content: &str, source: &str) -> Result<VocabularyData, VocabularyLoadError> {
    let data: VocabularyData = serde_json::from_str(content)
        .map_err(|e| VocabularyLoadError::ParseError(source.to_string(), e.to_string()))?;

    if data.sections.is_empty() {
        return Err(VocabularyLoadError::NoSections(source.to_string()));
    }

    Ok(data)
}

/// Load vocabulary from a list.json file.
pub fn load_vocabulary(path: &Path) -> Result<VocabularyData, VocabularyLoadError> {
    let source = path.display().to_string();

    if !path.exists() {
        return Err(VocabularyLoadError::FileNotFound(source));
    }

    let content =
        fs::read_to_string(path).map_err(|e| VocabularyLoadError::IoError(source.clone(), e.to_string()))?;

    let data = parse_vocabulary(&content, &source)?;
    tracing::debug!(
        "Loaded {} sections ({} words) from {}",
        data.sections.len(),
        data.all_words().count(),
        source
    );
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"{
        "sections": [
            {"title": "Unit 1", "vocabulary": [
                {"word": "abate", "pos": "v.", "definition": "to lessen"},
                {"word": "bolster", "pos": "v.", "definition": "to support"}
            ]},
            {"title": "Unit 2", "vocabulary": []}
        ]
    }"#;

    #[test]
    fn test_load_vocabulary_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("list.json");
        fs::write(&path, SAMPLE).unwrap();

        let data = load_vocabulary(&path).unwrap();
        assert_eq!(data.sections.len(), 2);
        assert_eq!(data.sections[0].vocabulary.len(), 2);
        assert!(data.sections[1].vocabulary.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = load_vocabulary(&temp.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, VocabularyLoadError::FileNotFound(_)));
        assert_eq!(err.user_message(), "Vocabulary file not found");
    }

    #[test]
    fn test_parse_error() {
        let err = parse_vocabulary("{\"sections\": 5}", "inline").unwrap_err();
        assert!(matches!(err, VocabularyLoadError::ParseError(_, _)));
    }

    #[test]
    fn test_empty_sections_rejected() {
        let err = parse_vocabulary(r#"{"sections": []}"#, "inline").unwrap_err();
        assert!(matches!(err, VocabularyLoadError::NoSections(_)));
    }
}
