//! Review queues: due today, difficult words, and the review calendar.

use axum::{
  extract::{Query, State},
  Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{lock_progress, ApiError, ApiResult};
use crate::srs::{self, DifficultWord};
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct DueResponse {
  pub today: NaiveDate,
  pub words: Vec<String>,
}

pub async fn due(State(state): State<AppState>) -> ApiResult<DueResponse> {
  let today = srs::today();
  let progress = lock_progress(&state)?;
  Ok(Json(DueResponse {
    today,
    words: srs::due_words(&progress.word_stats, today),
  }))
}

pub async fn difficult(State(state): State<AppState>) -> ApiResult<Vec<DifficultWord>> {
  let progress = lock_progress(&state)?;
  Ok(Json(srs::difficult_words(&progress.word_stats, srs::today())))
}

#[derive(Debug, Deserialize)]
pub struct ForecastQuery {
  pub from: Option<NaiveDate>,
  pub to: Option<NaiveDate>,
}

/// Scheduled reviews by date, optionally limited to `from..=to`
pub async fn forecast(
  State(state): State<AppState>,
  Query(query): Query<ForecastQuery>,
) -> ApiResult<BTreeMap<NaiveDate, Vec<String>>> {
  if let (Some(from), Some(to)) = (query.from, query.to) {
    if from > to {
      return Err(ApiError::BadRequest("'from' must not be after 'to'".to_string()));
    }
  }

  let progress = lock_progress(&state)?;
  let forecast = srs::review_forecast(&progress.word_stats)
    .into_iter()
    .filter(|(date, _)| query.from.is_none_or(|from| *date >= from))
    .filter(|(date, _)| query.to.is_none_or(|to| *date <= to))
    .collect();
  Ok(Json(forecast))
}
