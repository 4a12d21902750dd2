//! Leveled spaced-repetition state machine.
//!
//! Levels run from 0 (never answered) to the interval table's `max_level`.
//! A correct answer promotes by one level, capped at the ceiling. An incorrect
//! answer halves the level (floored, minimum 1, never above the ceiling) and
//! always schedules the next review at the level-1 interval.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use super::IntervalTable;

/// Scheduling fields produced by an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SrsUpdate {
  pub srs_level: u32,
  pub next_review: NaiveDate,
  pub last_reviewed: NaiveDate,
}

/// Earliest review date for a word sitting at `level`
pub fn next_review_date(level: u32, intervals: &IntervalTable, today: NaiveDate) -> NaiveDate {
  let days = intervals.interval_for(level);
  today
    .checked_add_days(Days::new(u64::from(days)))
    .unwrap_or(NaiveDate::MAX)
}

pub fn record_correct_answer(
  current_level: u32,
  intervals: &IntervalTable,
  today: NaiveDate,
) -> SrsUpdate {
  let new_level = intervals.max_level().min(current_level.saturating_add(1));
  SrsUpdate {
    srs_level: new_level,
    next_review: next_review_date(new_level, intervals, today),
    last_reviewed: today,
  }
}

pub fn record_incorrect_answer(
  current_level: u32,
  intervals: &IntervalTable,
  today: NaiveDate,
) -> SrsUpdate {
  let new_level = (current_level / 2).max(1).min(intervals.max_level());
  SrsUpdate {
    srs_level: new_level,
    // urgency after a miss is always the level-1 interval
    next_review: next_review_date(1, intervals, today),
    last_reviewed: today,
  }
}
