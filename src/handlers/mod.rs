pub mod backup;
pub mod lists;
pub mod quiz;
pub mod review;
pub mod settings;
pub mod words;

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  routing::{delete, get, post, put},
  Json, Router,
};
use serde_json::json;
use std::sync::MutexGuard;
use thiserror::Error;
use tower_http::trace::TraceLayer;

use crate::domain::Vocabulary;
use crate::progress::{ListError, StudyProgress};
use crate::services::backup::ImportError;
use crate::services::study_sets::StudySetError;
use crate::srs::IntervalError;
use crate::state::AppState;

/// Error type for JSON handlers, rendered as `{ "error": message }`
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("{0}")]
  NotFound(String),
  #[error("{0}")]
  BadRequest(String),
  #[error("{0}")]
  Conflict(String),
  #[error("Study state unavailable")]
  Unavailable,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = match self {
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
      ApiError::Conflict(_) => StatusCode::CONFLICT,
      ApiError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
    };
    (status, Json(json!({ "error": self.to_string() }))).into_response()
  }
}

impl From<ListError> for ApiError {
  fn from(e: ListError) -> Self {
    match e {
      ListError::EmptyName => ApiError::BadRequest(e.to_string()),
      ListError::Duplicate => ApiError::Conflict(e.to_string()),
      ListError::NotFound(_) => ApiError::NotFound(e.to_string()),
    }
  }
}

impl From<StudySetError> for ApiError {
  fn from(e: StudySetError) -> Self {
    match e {
      StudySetError::Invalid(_) => ApiError::BadRequest(e.to_string()),
      StudySetError::UnknownSection(_) | StudySetError::UnknownList(_) => ApiError::NotFound(e.to_string()),
    }
  }
}

impl From<IntervalError> for ApiError {
  fn from(e: IntervalError) -> Self {
    ApiError::BadRequest(e.to_string())
  }
}

impl From<ImportError> for ApiError {
  fn from(e: ImportError) -> Self {
    tracing::warn!("Rejected import: {}", e);
    ApiError::BadRequest(e.user_message().to_string())
  }
}

pub type ApiResult<T> = Result<Json<T>, ApiError>;

pub(crate) fn lock_progress(state: &AppState) -> Result<MutexGuard<'_, StudyProgress>, ApiError> {
  state.lock_progress().ok_or(ApiError::Unavailable)
}

/// Only words from the vocabulary file can be studied
pub(crate) fn require_word<'a>(state: &'a AppState, word: &str) -> Result<&'a Vocabulary, ApiError> {
  state
    .vocabulary
    .find(word)
    .ok_or_else(|| ApiError::NotFound(format!("Unknown word: {}", word)))
}

/// All JSON routes
pub fn router(state: AppState) -> Router {
  Router::new()
    .route("/api/sections", get(words::sections))
    .route("/api/study", get(words::study_set))
    .route("/api/words/{word}", get(words::word_detail))
    .route("/api/words/{word}/answer", post(words::answer))
    .route("/api/words/{word}/favorite", post(words::toggle_favorite))
    .route("/api/words/{word}/known", post(words::toggle_known))
    .route("/api/review/due", get(review::due))
    .route("/api/review/difficult", get(review::difficult))
    .route("/api/review/forecast", get(review::forecast))
    .route("/api/lists", get(lists::all_lists).post(lists::create_list))
    .route("/api/lists/{name}", delete(lists::delete_list))
    .route("/api/lists/{name}/toggle", post(lists::toggle_word))
    .route(
      "/api/settings/intervals",
      get(settings::get_intervals).put(settings::update_intervals),
    )
    .route("/api/settings/intervals/reset", post(settings::reset_intervals))
    .route(
      "/api/settings/intervals/{level}",
      put(settings::update_level_interval),
    )
    .route("/api/export", get(backup::export))
    .route("/api/import", post(backup::import))
    .route("/api/quiz", post(quiz::start))
    .route("/api/quiz/{id}/answer", post(quiz::answer))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}
