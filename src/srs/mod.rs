pub mod difficulty;
pub mod intervals;
pub mod leveled;
pub mod views;

pub use difficulty::calculate_difficulty;
pub use intervals::{IntervalError, IntervalTable, DEFAULT_INTERVALS};
pub use leveled::{next_review_date, record_correct_answer, record_incorrect_answer, SrsUpdate};
pub use views::{
  difficult_words, due_words, favorite_words, is_due, known_words, review_forecast, DifficultWord,
};

use chrono::{Local, NaiveDate};

/// The host's local calendar day; all scheduling is done at day granularity
pub fn today() -> NaiveDate {
  Local::now().date_naive()
}
