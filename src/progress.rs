//! The study state container.
//!
//! `StudyProgress` is the single source of truth for a session: word stats,
//! custom lists and the interval table. It is also the persisted and exported
//! shape. The SRS engine functions are pure; this type applies their results.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{CustomList, WordStat, WordStats};
use crate::srs::{self, IntervalError, IntervalTable};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
  #[error("list name cannot be empty")]
  EmptyName,
  #[error("a list with this name already exists")]
  Duplicate,
  #[error("list not found: {0}")]
  NotFound(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyProgress {
  #[serde(default)]
  pub word_stats: WordStats,
  #[serde(default)]
  pub custom_lists: Vec<CustomList>,
  #[serde(default)]
  pub srs_intervals: IntervalTable,
}

impl StudyProgress {
  pub fn new() -> Self {
    Self::default()
  }

  /// Stat for a word, or the never-studied default. Does not insert.
  pub fn stat(&self, word: &str) -> WordStat {
    self.word_stats.get(word).cloned().unwrap_or_default()
  }

  fn stat_mut(&mut self, word: &str) -> &mut WordStat {
    self.word_stats.entry(word.to_string()).or_default()
  }

  /// Returns the new favorite flag
  pub fn toggle_favorite(&mut self, word: &str) -> bool {
    let stat = self.stat_mut(word);
    stat.is_favorite = !stat.is_favorite;
    stat.is_favorite
  }

  /// Flip the known flag. Scheduling fields are left as they are, so
  /// un-marking resumes from the previous level and review date.
  pub fn toggle_known(&mut self, word: &str) -> bool {
    let stat = self.stat_mut(word);
    stat.is_known = !stat.is_known;
    stat.is_known
  }

  /// Apply a quiz answer to a word and return its updated stat
  pub fn record_answer(&mut self, word: &str, knew_it: bool, today: NaiveDate) -> WordStat {
    let intervals = &self.srs_intervals;
    let stat = self.word_stats.entry(word.to_string()).or_default();

    let update = if knew_it {
      stat.correct_count += 1;
      srs::record_correct_answer(stat.srs_level, intervals, today)
    } else {
      stat.incorrect_count += 1;
      srs::record_incorrect_answer(stat.srs_level, intervals, today)
    };

    stat.srs_level = update.srs_level;
    stat.next_review = Some(update.next_review);
    stat.last_reviewed = Some(update.last_reviewed);

    tracing::debug!(
      word,
      knew_it,
      level = update.srs_level,
      next_review = %update.next_review,
      "Recorded answer"
    );

    stat.clone()
  }

  pub fn list(&self, name: &str) -> Option<&CustomList> {
    self.custom_lists.iter().find(|l| l.name == name)
  }

  pub fn create_list(&mut self, name: &str) -> Result<(), ListError> {
    let name = name.trim();
    if name.is_empty() {
      return Err(ListError::EmptyName);
    }
    if self.list(name).is_some() {
      return Err(ListError::Duplicate);
    }
    self.custom_lists.push(CustomList::new(name));
    Ok(())
  }

  /// Returns false if no list had that name
  pub fn delete_list(&mut self, name: &str) -> bool {
    let before = self.custom_lists.len();
    self.custom_lists.retain(|l| l.name != name);
    self.custom_lists.len() != before
  }

  /// Toggle a word's membership in a list and return the new membership
  pub fn toggle_word_in_list(&mut self, list_name: &str, word: &str) -> Result<bool, ListError> {
    self
      .custom_lists
      .iter_mut()
      .find(|l| l.name == list_name)
      .map(|list| list.toggle(word))
      .ok_or_else(|| ListError::NotFound(list_name.to_string()))
  }

  /// Replace the interval table. Stored levels above the new ceiling are
  /// lowered to it.
  pub fn set_intervals(&mut self, intervals: IntervalTable) -> Result<(), IntervalError> {
    intervals.validate()?;
    self.srs_intervals = intervals;
    self.clamp_levels();
    Ok(())
  }

  /// Change the days of one existing level; the table size never changes
  pub fn set_interval(&mut self, level: u32, days: u32) -> Result<(), IntervalError> {
    self.srs_intervals.set_interval(level, days)
  }

  pub fn reset_intervals(&mut self) {
    self.srs_intervals = IntervalTable::default();
    self.clamp_levels();
  }

  /// Lower every stored level to the current `max_level`. Returns how many
  /// words changed.
  pub fn clamp_levels(&mut self) -> usize {
    let max_level = self.srs_intervals.max_level();
    let mut clamped = 0;
    for (word, stat) in self.word_stats.iter_mut() {
      if stat.srs_level > max_level {
        tracing::debug!(word = %word, from = stat.srs_level, to = max_level, "Clamped level");
        stat.srs_level = max_level;
        clamped += 1;
      }
    }
    clamped
  }

  /// Swap in a fully validated state (import)
  pub fn replace_with(&mut self, other: StudyProgress) {
    *self = other;
  }
}
