//! Browsing and answering individual words.

use axum::{
  extract::{Path, Query, State},
  Json,
};
use serde::{Deserialize, Serialize};

use super::{lock_progress, require_word, ApiResult};
use crate::domain::{EnrichedVocabulary, WordStat};
use crate::services::study_sets::{self, StudySet};
use crate::srs;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionSummary {
  pub index: usize,
  pub title: String,
  pub word_count: usize,
}

pub async fn sections(State(state): State<AppState>) -> ApiResult<Vec<SectionSummary>> {
  let summaries = state
    .vocabulary
    .sections
    .iter()
    .enumerate()
    .map(|(index, section)| SectionSummary {
      index,
      title: section.title.clone(),
      word_count: section.vocabulary.len(),
    })
    .collect();
  Ok(Json(summaries))
}

#[derive(Debug, Deserialize)]
pub struct StudyQuery {
  pub set: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySetResponse {
  pub set: String,
  pub title: String,
  pub words: Vec<EnrichedVocabulary>,
}

/// Words for a study set, `?set=section:0` by default
pub async fn study_set(
  State(state): State<AppState>,
  Query(query): Query<StudyQuery>,
) -> ApiResult<StudySetResponse> {
  let set: StudySet = match query.set {
    Some(raw) => raw.parse()?,
    None => StudySet::Section(0),
  };

  let progress = lock_progress(&state)?;
  let words = study_sets::resolve(&set, &state.vocabulary, &progress, srs::today())?;

  Ok(Json(StudySetResponse {
    set: set.to_string(),
    title: set.title(&state.vocabulary),
    words,
  }))
}

pub async fn word_detail(
  State(state): State<AppState>,
  Path(word): Path<String>,
) -> ApiResult<EnrichedVocabulary> {
  let vocab = require_word(&state, &word)?;
  let progress = lock_progress(&state)?;
  Ok(Json(study_sets::enrich(vocab, &progress, srs::today())))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRequest {
  pub knew_it: bool,
}

pub async fn answer(
  State(state): State<AppState>,
  Path(word): Path<String>,
  Json(req): Json<AnswerRequest>,
) -> ApiResult<WordStat> {
  require_word(&state, &word)?;
  let mut progress = lock_progress(&state)?;
  let stat = progress.record_answer(&word, req.knew_it, srs::today());
  state.persist(&progress);
  Ok(Json(stat))
}

pub async fn toggle_favorite(
  State(state): State<AppState>,
  Path(word): Path<String>,
) -> ApiResult<WordStat> {
  require_word(&state, &word)?;
  let mut progress = lock_progress(&state)?;
  progress.toggle_favorite(&word);
  state.persist(&progress);
  Ok(Json(progress.stat(&word)))
}

pub async fn toggle_known(
  State(state): State<AppState>,
  Path(word): Path<String>,
) -> ApiResult<WordStat> {
  require_word(&state, &word)?;
  let mut progress = lock_progress(&state)?;
  let known = progress.toggle_known(&word);
  tracing::debug!(word = %word, known, "Toggled known");
  state.persist(&progress);
  Ok(Json(progress.stat(&word)))
}
