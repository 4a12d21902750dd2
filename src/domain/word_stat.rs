use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-word study statistics keyed by word text
pub type WordStats = BTreeMap<String, WordStat>;

/// Study state for a single vocabulary word.
///
/// A word that has never been touched has no entry in [`WordStats`]; readers
/// treat a missing entry as [`WordStat::default`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WordStat {
  pub is_favorite: bool,
  pub correct_count: u32,
  pub incorrect_count: u32,
  /// 0 = never answered, otherwise 1..=max level of the interval table
  pub srs_level: u32,
  /// Earliest day the word is eligible for review
  pub next_review: Option<NaiveDate>,
  pub last_reviewed: Option<NaiveDate>,
  /// Known words are left out of review scheduling and active study sets
  pub is_known: bool,
}

impl WordStat {
  /// True once at least one quiz answer has been recorded
  pub fn has_answers(&self) -> bool {
    self.correct_count > 0 || self.incorrect_count > 0
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_is_never_studied() {
    let stat = WordStat::default();
    assert!(!stat.is_favorite);
    assert_eq!(stat.correct_count, 0);
    assert_eq!(stat.incorrect_count, 0);
    assert_eq!(stat.srs_level, 0);
    assert!(stat.next_review.is_none());
    assert!(stat.last_reviewed.is_none());
    assert!(!stat.is_known);
    assert!(!stat.has_answers());
  }

  #[test]
  fn test_has_answers() {
    let stat = WordStat {
      incorrect_count: 1,
      ..Default::default()
    };
    assert!(stat.has_answers());
  }

  #[test]
  fn test_serializes_camel_case_with_iso_dates() {
    let stat = WordStat {
      srs_level: 2,
      next_review: NaiveDate::from_ymd_opt(2024, 3, 9),
      ..Default::default()
    };
    let json = serde_json::to_value(&stat).unwrap();
    assert_eq!(json["srsLevel"], 2);
    assert_eq!(json["nextReview"], "2024-03-09");
    assert!(json["lastReviewed"].is_null());
    assert_eq!(json["isFavorite"], false);
  }

  #[test]
  fn test_missing_fields_fall_back_to_defaults() {
    let stat: WordStat = serde_json::from_str(r#"{"isFavorite": true}"#).unwrap();
    assert!(stat.is_favorite);
    assert_eq!(stat.srs_level, 0);
    assert!(stat.next_review.is_none());
  }
}
