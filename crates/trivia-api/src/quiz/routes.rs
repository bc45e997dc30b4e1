use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use trivia_db::repositories::question;
use trivia_quiz::select_next_question;

use crate::{ApiState, error::ApiError};

use super::model::{QuizRequest, QuizResponse};

/// Create the quiz routes
pub fn routes() -> Router<ApiState> {
    Router::new().route("/quizzes", post(next_question))
}

async fn next_question(
    State(state): State<ApiState>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let category_id = request.quiz_category.category_id();

    let candidates = question::list_ids(&state.pool, category_id).await?;
    let next_id = select_next_question(
        &candidates,
        &request.previous_questions,
        &mut rand::thread_rng(),
    )
    .inspect_err(|_| {
        tracing::debug!(
            ?category_id,
            seen = request.previous_questions.len(),
            "quiz category exhausted"
        );
    })?;

    let question = question::get_by_id(&state.pool, next_id)
        .await?
        .ok_or_else(|| ApiError::BadRequest(format!("Question {next_id} was removed")))?;

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
