//! Study content.
//!
//! Vocabulary is read from a `list.json` file of titled sections. The content
//! is read-only; all study state lives in [`crate::progress::StudyProgress`].

pub mod vocabulary;

pub use vocabulary::{load_vocabulary, parse_vocabulary, VocabularyLoadError};
