//! Configurable level → interval table.
//!
//! The table is keyed numerically, so iteration is always in level order.
//! `max_level` is the number of entries, never a hardcoded constant.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Default table: level → days until next review
pub const DEFAULT_INTERVALS: [(u32, u32); 8] = [
  (1, 1),
  (2, 3),
  (3, 7),
  (4, 14),
  (5, 30),
  (6, 60),
  (7, 120),
  (8, 240),
];

/// Interval used when a level is missing from the table
pub const FALLBACK_INTERVAL_DAYS: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntervalError {
  #[error("interval table must contain at least one level")]
  Empty,
  #[error("level numbers must be positive")]
  ZeroLevel,
  #[error("interval for level {0} must be at least one day")]
  ZeroDays(u32),
  #[error("level {0} does not exist in the interval table")]
  UnknownLevel(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntervalTable(BTreeMap<u32, u32>);

impl Default for IntervalTable {
  fn default() -> Self {
    Self(DEFAULT_INTERVALS.into_iter().collect())
  }
}

impl IntervalTable {
  /// Build a table from level/day pairs, rejecting invalid entries
  pub fn from_pairs(pairs: impl IntoIterator<Item = (u32, u32)>) -> Result<Self, IntervalError> {
    let table = Self(pairs.into_iter().collect());
    table.validate()?;
    Ok(table)
  }

  pub fn validate(&self) -> Result<(), IntervalError> {
    if self.0.is_empty() {
      return Err(IntervalError::Empty);
    }
    for (&level, &days) in &self.0 {
      if level == 0 {
        return Err(IntervalError::ZeroLevel);
      }
      if days == 0 {
        return Err(IntervalError::ZeroDays(level));
      }
    }
    Ok(())
  }

  /// Highest reachable level
  pub fn max_level(&self) -> u32 {
    self.0.len() as u32
  }

  /// Days to wait at `level`, falling back to one day for unknown levels
  pub fn interval_for(&self, level: u32) -> u32 {
    self.0.get(&level).copied().unwrap_or(FALLBACK_INTERVAL_DAYS)
  }

  /// Change the interval of an existing level
  pub fn set_interval(&mut self, level: u32, days: u32) -> Result<(), IntervalError> {
    if days == 0 {
      return Err(IntervalError::ZeroDays(level));
    }
    match self.0.get_mut(&level) {
      Some(slot) => {
        *slot = days;
        Ok(())
      }
      None => Err(IntervalError::UnknownLevel(level)),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_table() {
    let table = IntervalTable::default();
    assert_eq!(table.max_level(), 8);
    assert_eq!(table.interval_for(1), 1);
    assert_eq!(table.interval_for(2), 3);
    assert_eq!(table.interval_for(8), 240);
    assert!(table.validate().is_ok());
  }

  #[test]
  fn test_missing_level_falls_back_to_one_day() {
    let table = IntervalTable::default();
    assert_eq!(table.interval_for(0), 1);
    assert_eq!(table.interval_for(99), 1);
  }

  #[test]
  fn test_max_level_follows_table_size() {
    let table = IntervalTable::from_pairs([(1, 2), (2, 5), (3, 9)]).unwrap();
    assert_eq!(table.max_level(), 3);
  }

  #[test]
  fn test_levels_serialize_numerically() {
    let table = IntervalTable::from_pairs([(10, 50), (2, 5), (1, 1)]).unwrap();
    let json = serde_json::to_string(&table).unwrap();
    assert_eq!(json, r#"{"1":1,"2":5,"10":50}"#);
  }

  #[test]
  fn test_validate_rejects_bad_tables() {
    assert_eq!(
      IntervalTable::from_pairs(Vec::<(u32, u32)>::new()),
      Err(IntervalError::Empty)
    );
    assert_eq!(IntervalTable::from_pairs([(0, 1)]), Err(IntervalError::ZeroLevel));
    assert_eq!(
      IntervalTable::from_pairs([(1, 1), (2, 0)]),
      Err(IntervalError::ZeroDays(2))
    );
  }

  #[test]
  fn test_set_interval() {
    let mut table = IntervalTable::default();
    table.set_interval(3, 10).unwrap();
    assert_eq!(table.interval_for(3), 10);
    assert_eq!(table.set_interval(3, 0), Err(IntervalError::ZeroDays(3)));
    assert_eq!(table.set_interval(9, 5), Err(IntervalError::UnknownLevel(9)));
    assert_eq!(table.max_level(), 8);
  }

  #[test]
  fn test_serializes_with_string_keys() {
    let json = serde_json::to_value(IntervalTable::default()).unwrap();
    assert_eq!(json["1"], 1);
    assert_eq!(json["8"], 240);

    let parsed: IntervalTable = serde_json::from_str(r#"{"1": 2, "2": 4}"#).unwrap();
    assert_eq!(parsed.max_level(), 2);
    assert_eq!(parsed.interval_for(2), 4);
  }
}
