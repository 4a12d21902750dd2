use axum::{
  extract::{Path, State},
  http::StatusCode,
  Json,
};
use serde::{Deserialize, Serialize};

use super::{lock_progress, require_word, ApiError, ApiResult};
use crate::domain::CustomList;
use crate::state::AppState;

pub async fn all_lists(State(state): State<AppState>) -> ApiResult<Vec<CustomList>> {
  let progress = lock_progress(&state)?;
  Ok(Json(progress.custom_lists.clone()))
}

#[derive(Debug, Deserialize)]
pub struct CreateListRequest {
  pub name: String,
}

pub async fn create_list(
  State(state): State<AppState>,
  Json(req): Json<CreateListRequest>,
) -> Result<(StatusCode, Json<CustomList>), ApiError> {
  let mut progress = lock_progress(&state)?;
  progress.create_list(&req.name)?;
  state.persist(&progress);

  let created = progress
    .list(req.name.trim())
    .cloned()
    .ok_or_else(|| ApiError::NotFound(req.name.clone()))?;
  tracing::info!("Created list '{}'", created.name);
  Ok((StatusCode::CREATED, Json(created)))
}

pub async fn delete_list(
  State(state): State<AppState>,
  Path(name): Path<String>,
) -> Result<StatusCode, ApiError> {
  let mut progress = lock_progress(&state)?;
  if !progress.delete_list(&name) {
    return Err(ApiError::NotFound(format!("list not found: {}", name)));
  }
  state.persist(&progress);
  tracing::info!("Deleted list '{}'", name);
  Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
pub struct ToggleWordRequest {
  pub word: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleWordResponse {
  pub list: String,
  pub word: String,
  pub in_list: bool,
}

pub async fn toggle_word(
  State(state): State<AppState>,
  Path(name): Path<String>,
  Json(req): Json<ToggleWordRequest>,
) -> ApiResult<ToggleWordResponse> {
  require_word(&state, &req.word)?;
  let mut progress = lock_progress(&state)?;
  let in_list = progress.toggle_word_in_list(&name, &req.word)?;
  state.persist(&progress);
  Ok(Json(ToggleWordResponse {
    list: name,
    word: req.word,
    in_list,
  }))
}
