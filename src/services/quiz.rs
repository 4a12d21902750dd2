//! Quiz flow: reveal a word, the user says whether they knew it, move on.
//!
//! The word order is shuffled once when the quiz starts. Answers are applied
//! to the study progress immediately, one at a time.

use chrono::NaiveDate;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::domain::WordStat;
use crate::progress::StudyProgress;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSession {
  pub title: String,
  pub words: Vec<String>,
  pub current_index: usize,
  pub correct_count: usize,
  pub finished: bool,
}

/// Outcome of one quiz answer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizStep {
  pub word: String,
  pub stat: WordStat,
  /// Next word to show, None once the quiz is finished
  pub next_word: Option<String>,
  pub finished: bool,
  pub total: usize,
  pub correct_count: usize,
}

impl QuizSession {
  /// Start a quiz over `words` in random order
  pub fn new(title: impl Into<String>, mut words: Vec<String>) -> Self {
    words.shuffle(&mut rand::rng());
    Self::in_order(title, words)
  }

  /// Start a quiz that keeps the given order
  pub fn in_order(title: impl Into<String>, words: Vec<String>) -> Self {
    let finished = words.is_empty();
    Self {
      title: title.into(),
      words,
      current_index: 0,
      correct_count: 0,
      finished,
    }
  }

  pub fn current_word(&self) -> Option<&str> {
    if self.finished {
      return None;
    }
    self.words.get(self.current_index).map(String::as_str)
  }

  pub fn total(&self) -> usize {
    self.words.len()
  }

  /// Record an answer for the current word and advance.
  /// Returns None if the quiz has already finished.
  pub fn answer(&mut self, progress: &mut StudyProgress, knew_it: bool, today: NaiveDate) -> Option<QuizStep> {
    let word = self.current_word()?.to_string();
    let stat = progress.record_answer(&word, knew_it, today);

    if knew_it {
      self.correct_count += 1;
    }
    if self.current_index + 1 >= self.words.len() {
      self.finished = true;
    } else {
      self.current_index += 1;
    }

    Some(QuizStep {
      word,
      stat,
      next_word: self.current_word().map(str::to_string),
      finished: self.finished,
      total: self.total(),
      correct_count: self.correct_count,
    })
  }
}
