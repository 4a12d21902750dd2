//! Application state shared by all handlers.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::db::{self, DbPool};
use crate::domain::VocabularyData;
use crate::progress::StudyProgress;

/// In-memory study progress; the source of truth for the running session
pub type SharedProgress = Arc<Mutex<StudyProgress>>;

/// Application state passed to all handlers
#[derive(Clone)]
pub struct AppState {
    pub progress: SharedProgress,

    /// Read-only vocabulary sections from list.json
    pub vocabulary: Arc<VocabularyData>,

    /// Progress store (written after every mutation)
    pub db: DbPool,

    /// Key under which this session's progress is persisted
    pub session_id: String,
}

impl AppState {
    pub fn new(progress: StudyProgress, vocabulary: VocabularyData, db: DbPool, session_id: String) -> Self {
        Self {
            progress: Arc::new(Mutex::new(progress)),
            vocabulary: Arc::new(vocabulary),
            db,
            session_id,
        }
    }

    /// Build state from whatever the store holds for `session_id`
    pub fn load(
        vocabulary: VocabularyData,
        db: DbPool,
        session_id: String,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let progress = {
            let conn = db::try_lock(&db)?;
            db::load_progress(&conn, &session_id)?
        };
        Ok(Self::new(progress, vocabulary, db, session_id))
    }

    pub fn lock_progress(&self) -> Option<MutexGuard<'_, StudyProgress>> {
        match self.progress.lock() {
            Ok(guard) => Some(guard),
            Err(_) => {
                tracing::error!("Progress mutex poisoned - a thread panicked while holding the lock");
                None
            }
        }
    }

    /// Best-effort write of the current progress
    pub fn persist(&self, progress: &StudyProgress) {
        db::persist(&self.db, &self.session_id, progress);
    }
}
