use serde::{Deserialize, Serialize};

use super::WordStat;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Derivative {
  pub word: String,
  pub pos: String,
  pub definition: String,
}

/// Vocabulary entry as found in list.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vocabulary {
  pub word: String,
  pub pos: String,
  pub definition: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub examples: Option<Vec<String>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub notes: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub derivatives: Option<Vec<Derivative>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub antonyms: Option<Vec<String>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub synonyms: Option<Vec<String>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub distinctions: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
  pub title: String,
  #[serde(default)]
  pub vocabulary: Vec<Vocabulary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyData {
  pub sections: Vec<Section>,
}

impl VocabularyData {
  /// Find a word across all sections (first occurrence wins)
  pub fn find(&self, word: &str) -> Option<&Vocabulary> {
    self
      .sections
      .iter()
      .flat_map(|s| s.vocabulary.iter())
      .find(|v| v.word == word)
  }

  /// Every vocabulary entry, in section order
  pub fn all_words(&self) -> impl Iterator<Item = &Vocabulary> {
    self.sections.iter().flat_map(|s| s.vocabulary.iter())
  }
}

/// Vocabulary entry merged with its study state, as handed to the UI
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedVocabulary {
  #[serde(flatten)]
  pub vocabulary: Vocabulary,
  #[serde(flatten)]
  pub stat: WordStat,
  pub difficulty: f64,
}
