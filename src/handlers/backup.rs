//! Progress export and import.

use axum::{
  body::Body,
  extract::State,
  http::{header, StatusCode},
  response::{IntoResponse, Response},
  Json,
};

use super::{lock_progress, ApiResult};
use crate::services::backup::{self, ImportResult};
use crate::srs;
use crate::state::AppState;

/// Download the full study state as a JSON attachment
pub async fn export(State(state): State<AppState>) -> Response {
  let json = {
    let Some(progress) = state.lock_progress() else {
      return StatusCode::SERVICE_UNAVAILABLE.into_response();
    };
    match backup::export_progress(&progress) {
      Ok(json) => json,
      Err(e) => {
        tracing::error!("Failed to serialize progress: {}", e);
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
      }
    }
  };

  let filename = backup::export_filename(srs::today());
  Response::builder()
    .status(StatusCode::OK)
    .header(header::CONTENT_TYPE, "application/json")
    .header(
      header::CONTENT_DISPOSITION,
      format!("attachment; filename=\"{}\"", filename),
    )
    .body(Body::from(json))
    .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

/// Replace the study state with an uploaded export. All or nothing.
pub async fn import(State(state): State<AppState>, body: String) -> ApiResult<ImportResult> {
  let mut progress = lock_progress(&state)?;
  let result = backup::import_progress(&mut progress, &body)?;
  state.persist(&progress);
  tracing::info!(
    "Imported {} word stats and {} lists",
    result.words_imported,
    result.lists_imported
  );
  Ok(Json(result))
}
