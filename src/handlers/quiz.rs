use axum::{
  extract::{Path, State},
  Json,
};
use serde::{Deserialize, Serialize};

use super::{lock_progress, words::AnswerRequest, ApiError, ApiResult};
use crate::domain::{EnrichedVocabulary, WordStat};
use crate::services::quiz::QuizSession;
use crate::services::study_sets::{self, StudySet};
use crate::session;
use crate::srs;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StartQuizRequest {
  pub set: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartQuizResponse {
  pub id: String,
  pub title: String,
  pub total: usize,
  pub current: Option<EnrichedVocabulary>,
}

pub async fn start(
  State(state): State<AppState>,
  Json(req): Json<StartQuizRequest>,
) -> ApiResult<StartQuizResponse> {
  let set: StudySet = req.set.parse()?;
  let today = srs::today();
  let progress = lock_progress(&state)?;
  let words = study_sets::resolve(&set, &state.vocabulary, &progress, today)?;

  let title = set.title(&state.vocabulary);
  let quiz = QuizSession::new(title.clone(), words.iter().map(|w| w.vocabulary.word.clone()).collect());
  let total = quiz.total();
  let current = quiz
    .current_word()
    .and_then(|word| words.iter().find(|w| w.vocabulary.word == word))
    .cloned();

  let id = session::start_quiz(quiz);
  tracing::debug!("Started quiz {} over '{}' ({} words)", id, title, total);

  Ok(Json(StartQuizResponse {
    id,
    title,
    total,
    current,
  }))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAnswerResponse {
  pub word: String,
  pub stat: WordStat,
  pub next: Option<EnrichedVocabulary>,
  pub finished: bool,
  pub total: usize,
  pub correct_count: usize,
}

pub async fn answer(
  State(state): State<AppState>,
  Path(id): Path<String>,
  Json(req): Json<AnswerRequest>,
) -> ApiResult<QuizAnswerResponse> {
  let today = srs::today();
  let mut progress = lock_progress(&state)?;

  let step = session::with_quiz(&id, |quiz| quiz.answer(&mut progress, req.knew_it, today))
    .ok_or_else(|| ApiError::NotFound(format!("Quiz not found: {}", id)))?
    .ok_or_else(|| ApiError::Conflict("Quiz already finished".to_string()))?;
  state.persist(&progress);

  if step.finished {
    session::end_quiz(&id);
  }

  let next = step
    .next_word
    .as_deref()
    .and_then(|word| state.vocabulary.find(word))
    .map(|vocab| study_sets::enrich(vocab, &progress, today));

  Ok(Json(QuizAnswerResponse {
    word: step.word,
    stat: step.stat,
    next,
    finished: step.finished,
    total: step.total,
    correct_count: step.correct_count,
  }))
}
