//! Difficulty score for the "difficult words" queue.
//!
//! Higher is more urgent. Incorrect answers dominate, correct answers pull the
//! score down, and elapsed days since the last answer add slow linear pressure.
//! The score can be negative; it is only meaningful for relative ordering.

use chrono::NaiveDate;

use crate::domain::WordStat;

pub const INCORRECT_WEIGHT: f64 = 5.0;
pub const CORRECT_WEIGHT: f64 = -2.0;
/// Added per whole day since the last review
pub const TIME_FACTOR: f64 = 0.1;

pub fn calculate_difficulty(stat: Option<&WordStat>, today: NaiveDate) -> f64 {
  let Some(stat) = stat else {
    return 0.0;
  };

  let days_since_last_review = stat
    .last_reviewed
    .map(|last| (today - last).num_days())
    .unwrap_or(0);

  f64::from(stat.incorrect_count) * INCORRECT_WEIGHT
    + f64::from(stat.correct_count) * CORRECT_WEIGHT
    + days_since_last_review as f64 * TIME_FACTOR
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::Days;

  fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 4, 20).unwrap()
  }

  #[test]
  fn test_absent_stat_scores_zero() {
    assert_eq!(calculate_difficulty(None, today()), 0.0);
  }

  #[test]
  fn test_default_stat_scores_zero() {
    assert_eq!(calculate_difficulty(Some(&WordStat::default()), today()), 0.0);
  }

  #[test]
  fn test_mixed_history_with_elapsed_days() {
    let stat = WordStat {
      incorrect_count: 3,
      correct_count: 1,
      last_reviewed: Some(today() - Days::new(5)),
      ..Default::default()
    };
    let score = calculate_difficulty(Some(&stat), today());
    assert!((score - 13.5).abs() < 1e-9);
  }

  #[test]
  fn test_well_known_word_scores_negative() {
    let stat = WordStat {
      correct_count: 6,
      last_reviewed: Some(today()),
      ..Default::default()
    };
    assert!(calculate_difficulty(Some(&stat), today()) < 0.0);
  }

  #[test]
  fn test_non_decreasing_in_incorrect_count() {
    let mut previous = f64::MIN;
    for incorrect in 0..10 {
      let stat = WordStat {
        incorrect_count: incorrect,
        correct_count: 2,
        last_reviewed: Some(today() - Days::new(3)),
        ..Default::default()
      };
      let score = calculate_difficulty(Some(&stat), today());
      assert!(score >= previous);
      previous = score;
    }
  }

  #[test]
  fn test_non_increasing_in_correct_count() {
    let mut previous = f64::MAX;
    for correct in 0..10 {
      let stat = WordStat {
        incorrect_count: 2,
        correct_count: correct,
        last_reviewed: Some(today() - Days::new(3)),
        ..Default::default()
      };
      let score = calculate_difficulty(Some(&stat), today());
      assert!(score <= previous);
      previous = score;
    }
  }

  #[test]
  fn test_stale_words_rise_slowly() {
    let recent = WordStat {
      incorrect_count: 1,
      last_reviewed: Some(today() - Days::new(1)),
      ..Default::default()
    };
    let stale = WordStat {
      last_reviewed: Some(today() - Days::new(30)),
      ..recent.clone()
    };
    let gap = calculate_difficulty(Some(&stale), today()) - calculate_difficulty(Some(&recent), today());
    assert!((gap - 2.9).abs() < 1e-9);
  }
}
