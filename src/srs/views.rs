//! Derived views over the word-stat map.
//!
//! Nothing here is cached: every view is recomputed from the canonical
//! [`WordStats`] map so it can never drift from the stored state.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use super::calculate_difficulty;
use crate::domain::{WordStat, WordStats};

/// A word with its difficulty score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DifficultWord {
  pub word: String,
  pub difficulty: f64,
}

/// Due iff not known and scheduled on or before today
pub fn is_due(stat: &WordStat, today: NaiveDate) -> bool {
  !stat.is_known && stat.next_review.is_some_and(|next| next <= today)
}

/// Words due for review, earliest scheduled first
pub fn due_words(stats: &WordStats, today: NaiveDate) -> Vec<String> {
  let mut due: Vec<(&String, NaiveDate)> = stats
    .iter()
    .filter(|(_, stat)| is_due(stat, today))
    .filter_map(|(word, stat)| stat.next_review.map(|next| (word, next)))
    .collect();
  due.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
  due.into_iter().map(|(word, _)| word.clone()).collect()
}

/// Answered, not-known words ranked by difficulty (highest first)
pub fn difficult_words(stats: &WordStats, today: NaiveDate) -> Vec<DifficultWord> {
  let mut ranked: Vec<DifficultWord> = stats
    .iter()
    .filter(|(_, stat)| stat.has_answers() && !stat.is_known)
    .map(|(word, stat)| DifficultWord {
      word: word.clone(),
      difficulty: calculate_difficulty(Some(stat), today),
    })
    .collect();
  ranked.sort_by(|a, b| {
    b.difficulty
      .total_cmp(&a.difficulty)
      .then_with(|| a.word.cmp(&b.word))
  });
  ranked
}

pub fn favorite_words(stats: &WordStats) -> Vec<String> {
  stats
    .iter()
    .filter(|(_, stat)| stat.is_favorite)
    .map(|(word, _)| word.clone())
    .collect()
}

pub fn known_words(stats: &WordStats) -> Vec<String> {
  stats
    .iter()
    .filter(|(_, stat)| stat.is_known)
    .map(|(word, _)| word.clone())
    .collect()
}

/// Scheduled reviews grouped by date, for the review calendar.
/// Known words are not scheduled and are left out.
pub fn review_forecast(stats: &WordStats) -> BTreeMap<NaiveDate, Vec<String>> {
  let mut forecast: BTreeMap<NaiveDate, Vec<String>> = BTreeMap::new();
  for (word, stat) in stats {
    if stat.is_known {
      continue;
    }
    if let Some(next) = stat.next_review {
      forecast.entry(next).or_default().push(word.clone());
    }
  }
  forecast
}
