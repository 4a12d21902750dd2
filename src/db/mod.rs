pub mod schema;
pub mod store;

use rusqlite::{Connection, Result};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub use schema::run_migrations;
pub use store::{load_progress, save_progress, StoreError};

pub type DbPool = Arc<Mutex<Connection>>;

/// Extension trait for logging errors before discarding them
pub trait LogOnError<T> {
    /// Log the error at warn level and return None
    fn log_warn(self, context: &str) -> Option<T>;
}

impl<T, E: std::fmt::Display> LogOnError<T> for std::result::Result<T, E> {
    fn log_warn(self, context: &str) -> Option<T> {
        match self {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!("{}: {}", context, e);
                None
            }
        }
    }
}

/// Error returned when database lock cannot be acquired
#[derive(Debug)]
pub struct DbLockError;

impl std::fmt::Display for DbLockError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "Database unavailable")
  }
}

impl std::error::Error for DbLockError {}

/// Try to acquire the database lock, returning an error if poisoned
pub fn try_lock(pool: &DbPool) -> std::result::Result<MutexGuard<'_, Connection>, DbLockError> {
  pool.lock().map_err(|_: PoisonError<_>| {
    tracing::error!("Database mutex poisoned - a thread panicked while holding the lock");
    DbLockError
  })
}

pub fn init_db(path: &Path) -> Result<DbPool> {
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent).ok();
  }

  // Create backup before migrations if database exists
  if path.exists() {
    let backup_path = path.with_extension("db.backup");
    if let Err(e) = std::fs::copy(path, &backup_path) {
      tracing::warn!("Could not create database backup: {}", e);
    }
  }

  let conn = Connection::open(path)?;
  run_migrations(&conn)?;
  Ok(Arc::new(Mutex::new(conn)))
}

/// In-memory database with the full schema, for tests
pub fn init_memory_db() -> Result<DbPool> {
  let conn = Connection::open_in_memory()?;
  run_migrations(&conn)?;
  Ok(Arc::new(Mutex::new(conn)))
}

/// Persist progress after a mutation. Best-effort: failures are logged and
/// the in-memory state stays authoritative.
pub fn persist(pool: &DbPool, session_id: &str, progress: &crate::progress::StudyProgress) {
  let Some(conn) = try_lock(pool).log_warn("Skipping save") else {
    return;
  };
  save_progress(&conn, session_id, progress).log_warn("Failed to save study progress");
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::TempDir;

  #[test]
  fn test_log_warn_passes_values_through() {
    let ok: std::result::Result<u8, String> = Ok(3);
    assert_eq!(ok.log_warn("ctx"), Some(3));
    let err: std::result::Result<u8, String> = Err("boom".into());
    assert_eq!(err.log_warn("ctx"), None);
  }

  #[test]
  fn test_init_db_creates_parent_and_backup() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("progress.db");

    drop(init_db(&path).unwrap());
    assert!(path.exists());

    drop(init_db(&path).unwrap());
    assert!(path.with_extension("db.backup").exists());
  }

  #[test]
  fn test_persist_writes_progress() {
    let pool = init_memory_db().unwrap();
    let mut progress = crate::progress::StudyProgress::new();
    progress.toggle_favorite("zeal");
    persist(&pool, "default", &progress);

    let conn = try_lock(&pool).unwrap();
    assert_eq!(load_progress(&conn, "default").unwrap(), progress);
  }
}
