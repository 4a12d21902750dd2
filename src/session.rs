//! Simple in-memory storage for quiz sessions.
//!
//! Stores QuizSession state keyed by a generated quiz id.
//! Quizzes auto-expire after a configurable duration of inactivity.

use crate::config;
use crate::services::quiz::QuizSession;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{LazyLock, Mutex, MutexGuard};

/// Quiz entry with last access time for expiration
struct QuizEntry {
  quiz: QuizSession,
  last_access: DateTime<Utc>,
}

/// Global quiz store
static QUIZZES: LazyLock<Mutex<HashMap<String, QuizEntry>>> =
  LazyLock::new(|| Mutex::new(HashMap::new()));

fn lock_store() -> MutexGuard<'static, HashMap<String, QuizEntry>> {
  // A panic mid-update leaves at worst one stale quiz behind
  QUIZZES.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Store a new quiz and return its id
pub fn start_quiz(quiz: QuizSession) -> String {
  let id = generate_session_id();
  let mut quizzes = lock_store();

  // Clean up expired quizzes occasionally (~10% chance)
  if rand::random::<u8>() < config::QUIZ_CLEANUP_THRESHOLD {
    cleanup_expired(&mut quizzes);
  }

  quizzes.insert(
    id.clone(),
    QuizEntry {
      quiz,
      last_access: Utc::now(),
    },
  );
  id
}

/// Run `f` against a stored quiz, refreshing its access time
pub fn with_quiz<R>(id: &str, f: impl FnOnce(&mut QuizSession) -> R) -> Option<R> {
  let mut quizzes = lock_store();
  let entry = quizzes.get_mut(id)?;
  entry.last_access = Utc::now();
  Some(f(&mut entry.quiz))
}

/// Drop a quiz (e.g. once it is finished)
pub fn end_quiz(id: &str) -> bool {
  lock_store().remove(id).is_some()
}

/// Clean up expired quizzes
fn cleanup_expired(quizzes: &mut HashMap<String, QuizEntry>) {
  let expiry = Utc::now() - Duration::hours(config::QUIZ_EXPIRY_HOURS);
  quizzes.retain(|_, entry| entry.last_access > expiry);
}

/// Generate a new quiz id
pub fn generate_session_id() -> String {
  use rand::Rng;
  let mut rng = rand::rng();
  (0..32)
    .map(|_| {
      let idx = rng.random_range(0..36);
      if idx < 10 {
        (b'0' + idx) as char
      } else {
        (b'a' + idx - 10) as char
      }
    })
    .collect()
}
