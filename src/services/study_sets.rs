//! Resolving which words a card or quiz view shows.
//!
//! Sections and custom lists come from the vocabulary file and the user's
//! lists; the remaining sets are derived from word stats. Known words drop
//! out of every active set and only appear in [`StudySet::Known`].

use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::domain::{EnrichedVocabulary, Vocabulary, VocabularyData};
use crate::progress::StudyProgress;
use crate::srs;

/// A selectable group of words, written as `section:0`, `list:Name`,
/// `favorites`, `difficult`, `due` or `known`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudySet {
  Section(usize),
  CustomList(String),
  Favorites,
  Difficult,
  DueToday,
  Known,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StudySetError {
  #[error("section {0} does not exist")]
  UnknownSection(usize),
  #[error("list not found: {0}")]
  UnknownList(String),
  #[error("invalid study set: {0}")]
  Invalid(String),
}

impl StudySet {
  pub fn title(&self, vocabulary: &VocabularyData) -> String {
    match self {
      Self::Section(index) => vocabulary
        .sections
        .get(*index)
        .map(|s| s.title.clone())
        .unwrap_or_else(|| format!("Section {}", index + 1)),
      Self::CustomList(name) => name.clone(),
      Self::Favorites => "Favorites".to_string(),
      Self::Difficult => "Difficult Words".to_string(),
      Self::DueToday => "Due for Review".to_string(),
      Self::Known => "Known Words".to_string(),
    }
  }
}

/// Query-string form: `section:0`, `list:Week 1`, `favorites`, `difficult`,
/// `due`, `known`
impl FromStr for StudySet {
  type Err = StudySetError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    if let Some(index) = s.strip_prefix("section:") {
      return index
        .parse()
        .map(Self::Section)
        .map_err(|_| StudySetError::Invalid(s.to_string()));
    }
    if let Some(name) = s.strip_prefix("list:") {
      return Ok(Self::CustomList(name.to_string()));
    }
    match s {
      "favorites" => Ok(Self::Favorites),
      "difficult" => Ok(Self::Difficult),
      "due" => Ok(Self::DueToday),
      "known" => Ok(Self::Known),
      _ => Err(StudySetError::Invalid(s.to_string())),
    }
  }
}

impl fmt::Display for StudySet {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Section(index) => write!(f, "section:{}", index),
      Self::CustomList(name) => write!(f, "list:{}", name),
      Self::Favorites => write!(f, "favorites"),
      Self::Difficult => write!(f, "difficult"),
      Self::DueToday => write!(f, "due"),
      Self::Known => write!(f, "known"),
    }
  }
}

/// Merge a vocabulary entry with its stat and difficulty
pub fn enrich(vocab: &Vocabulary, progress: &StudyProgress, today: NaiveDate) -> EnrichedVocabulary {
  let stat = progress.word_stats.get(&vocab.word);
  EnrichedVocabulary {
    vocabulary: vocab.clone(),
    difficulty: srs::calculate_difficulty(stat, today),
    stat: stat.cloned().unwrap_or_default(),
  }
}

/// Words of a study set, enriched, in the set's natural order.
///
/// Words referenced by stats or lists but missing from the vocabulary file
/// are skipped.
pub fn resolve(
  set: &StudySet,
  vocabulary: &VocabularyData,
  progress: &StudyProgress,
  today: NaiveDate,
) -> Result<Vec<EnrichedVocabulary>, StudySetError> {
  let is_active = |v: &&Vocabulary| !progress.stat(&v.word).is_known;

  let words: Vec<&Vocabulary> = match set {
    StudySet::Section(index) => vocabulary
      .sections
      .get(*index)
      .ok_or(StudySetError::UnknownSection(*index))?
      .vocabulary
      .iter()
      .filter(is_active)
      .collect(),
    StudySet::CustomList(name) => progress
      .list(name)
      .ok_or_else(|| StudySetError::UnknownList(name.clone()))?
      .words
      .iter()
      .filter_map(|w| vocabulary.find(w))
      .filter(is_active)
      .collect(),
    StudySet::Favorites => lookup(vocabulary, srs::favorite_words(&progress.word_stats))
      .into_iter()
      .filter(is_active)
      .collect(),
    StudySet::Difficult => {
      let ranked = srs::difficult_words(&progress.word_stats, today)
        .into_iter()
        .map(|d| d.word)
        .collect();
      lookup(vocabulary, ranked)
    }
    StudySet::DueToday => lookup(vocabulary, srs::due_words(&progress.word_stats, today)),
    StudySet::Known => lookup(vocabulary, srs::known_words(&progress.word_stats)),
  };

  Ok(
    words
      .into_iter()
      .map(|v| enrich(v, progress, today))
      .collect(),
  )
}

fn lookup(vocabulary: &VocabularyData, words: Vec<String>) -> Vec<&Vocabulary> {
  words.iter().filter_map(|w| vocabulary.find(w)).collect()
}
