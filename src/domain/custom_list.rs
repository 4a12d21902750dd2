use serde::{Deserialize, Serialize};

/// A user-named collection of word references
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomList {
  pub name: String,
  #[serde(default)]
  pub words: Vec<String>,
}

impl CustomList {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      words: Vec::new(),
    }
  }

  pub fn contains(&self, word: &str) -> bool {
    self.words.iter().any(|w| w == word)
  }

  /// Add the word if absent, remove it if present.
  /// Returns the new membership.
  pub fn toggle(&mut self, word: &str) -> bool {
    if self.contains(word) {
      self.words.retain(|w| w != word);
      false
    } else {
      self.words.push(word.to_string());
      true
    }
  }
}
