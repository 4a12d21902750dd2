//! Session-keyed key-value persistence of study progress.
//!
//! Each part of [`StudyProgress`] is stored as a JSON value under its own key,
//! mirroring the exported shape (`wordStats`, `customLists`, `srsIntervals`).

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::progress::StudyProgress;

pub const WORD_STATS_KEY: &str = "wordStats";
pub const CUSTOM_LISTS_KEY: &str = "customLists";
pub const SRS_INTERVALS_KEY: &str = "srsIntervals";

#[derive(Debug, Error)]
pub enum StoreError {
  #[error("database error: {0}")]
  Sqlite(#[from] rusqlite::Error),
  #[error("serialization error: {0}")]
  Json(#[from] serde_json::Error),
}

/// Read a raw value for a session key
pub fn get_value(conn: &Connection, session_id: &str, key: &str) -> rusqlite::Result<Option<String>> {
  conn
    .query_row(
      "SELECT value FROM session_state WHERE session_id = ?1 AND key = ?2",
      params![session_id, key],
      |row| row.get(0),
    )
    .optional()
}

/// Insert or replace a raw value for a session key
pub fn set_value(conn: &Connection, session_id: &str, key: &str, value: &str) -> rusqlite::Result<()> {
  conn.execute(
    r#"
    INSERT INTO session_state (session_id, key, value, updated_at)
    VALUES (?1, ?2, ?3, ?4)
    ON CONFLICT(session_id, key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
    "#,
    params![session_id, key, value, Utc::now().to_rfc3339()],
  )?;
  Ok(())
}

/// Decode a stored key, falling back to the default when the key is missing
/// or its value is corrupt. A corrupt value is logged, never fatal.
fn load_or_default<T: DeserializeOwned + Default>(conn: &Connection, session_id: &str, key: &str) -> rusqlite::Result<T> {
  let Some(raw) = get_value(conn, session_id, key)? else {
    return Ok(T::default());
  };
  match serde_json::from_str(&raw) {
    Ok(value) => Ok(value),
    Err(e) => {
      tracing::warn!("Discarding corrupt '{}' for session {}: {}", key, session_id, e);
      Ok(T::default())
    }
  }
}

/// Load the full study progress for a session (defaults for anything absent)
pub fn load_progress(conn: &Connection, session_id: &str) -> rusqlite::Result<StudyProgress> {
  let mut progress = StudyProgress {
    word_stats: load_or_default(conn, session_id, WORD_STATS_KEY)?,
    custom_lists: load_or_default(conn, session_id, CUSTOM_LISTS_KEY)?,
    srs_intervals: load_or_default(conn, session_id, SRS_INTERVALS_KEY)?,
  };

  if let Err(e) = progress.srs_intervals.validate() {
    tracing::warn!("Stored interval table is invalid ({}), using defaults", e);
    progress.reset_intervals();
  }
  let clamped = progress.clamp_levels();
  if clamped > 0 {
    tracing::warn!("Lowered {} stored levels above the interval table", clamped);
  }

  tracing::debug!(
    "Loaded {} word stats and {} lists for session {}",
    progress.word_stats.len(),
    progress.custom_lists.len(),
    session_id
  );
  Ok(progress)
}

fn encode<T: Serialize>(value: &T) -> Result<String, StoreError> {
  Ok(serde_json::to_string(value)?)
}

/// Write every part of the progress in a single transaction
pub fn save_progress(conn: &Connection, session_id: &str, progress: &StudyProgress) -> Result<(), StoreError> {
  let word_stats = encode(&progress.word_stats)?;
  let custom_lists = encode(&progress.custom_lists)?;
  let srs_intervals = encode(&progress.srs_intervals)?;

  let tx = conn.unchecked_transaction()?;
  set_value(&tx, session_id, WORD_STATS_KEY, &word_stats)?;
  set_value(&tx, session_id, CUSTOM_LISTS_KEY, &custom_lists)?;
  set_value(&tx, session_id, SRS_INTERVALS_KEY, &srs_intervals)?;
  tx.commit()?;
  Ok(())
}
