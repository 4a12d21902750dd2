//! SRS interval settings.

use axum::{
  extract::{Path, State},
  Json,
};
use serde::{Deserialize, Serialize};

use super::{lock_progress, ApiResult};
use crate::srs::IntervalTable;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntervalsResponse {
  pub intervals: IntervalTable,
  pub max_level: u32,
}

impl IntervalsResponse {
  fn from_table(table: &IntervalTable) -> Self {
    Self {
      intervals: table.clone(),
      max_level: table.max_level(),
    }
  }
}

pub async fn get_intervals(State(state): State<AppState>) -> ApiResult<IntervalsResponse> {
  let progress = lock_progress(&state)?;
  Ok(Json(IntervalsResponse::from_table(&progress.srs_intervals)))
}

/// Replace the whole table; rejected tables leave the current one untouched.
/// Stored levels above a smaller table's ceiling are lowered to it.
pub async fn update_intervals(
  State(state): State<AppState>,
  Json(table): Json<IntervalTable>,
) -> ApiResult<IntervalsResponse> {
  let mut progress = lock_progress(&state)?;
  progress.set_intervals(table)?;
  state.persist(&progress);
  tracing::info!("Updated SRS intervals ({} levels)", progress.srs_intervals.max_level());
  Ok(Json(IntervalsResponse::from_table(&progress.srs_intervals)))
}

#[derive(Debug, Deserialize)]
pub struct LevelIntervalRequest {
  pub days: u32,
}

/// Edit the days of one existing level, leaving the table size alone
pub async fn update_level_interval(
  State(state): State<AppState>,
  Path(level): Path<u32>,
  Json(req): Json<LevelIntervalRequest>,
) -> ApiResult<IntervalsResponse> {
  let mut progress = lock_progress(&state)?;
  progress.set_interval(level, req.days)?;
  state.persist(&progress);
  Ok(Json(IntervalsResponse::from_table(&progress.srs_intervals)))
}

pub async fn reset_intervals(State(state): State<AppState>) -> ApiResult<IntervalsResponse> {
  let mut progress = lock_progress(&state)?;
  progress.reset_intervals();
  state.persist(&progress);
  Ok(Json(IntervalsResponse::from_table(&progress.srs_intervals)))
}
