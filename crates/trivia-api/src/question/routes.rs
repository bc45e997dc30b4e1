use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection, rejection::PathRejection},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use serde_json::Value;
use trivia_db::{
    models::NewQuestion,
    repositories::{category, question},
};

use crate::{
    ApiState, category::model::category_map, error::ApiError, pagination::PageQuery,
};

use super::model::{
    CreateQuestionRequest, CreatedResponse, DeletedResponse, QuestionsPageResponse,
    QuestionsPayload, SearchRequest, SearchResponse,
};

/// Create the question routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/questions", get(list_questions).post(create_or_search))
        .route("/questions/search", post(search_questions))
        .route("/questions/{question_id}", delete(delete_question))
}

async fn list_questions(
    State(state): State<ApiState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<QuestionsPageResponse>, ApiError> {
    let window = query.window()?;

    let questions = question::list_page(&state.pool, window.limit(), window.offset()).await?;
    let total_questions = question::count_all(&state.pool).await?;
    let categories = category::list_all(&state.pool).await?;

    Ok(Json(QuestionsPageResponse {
        success: true,
        questions,
        total_questions,
        categories: category_map(categories),
    }))
}

async fn create_or_search(
    State(state): State<ApiState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;

    match QuestionsPayload::from_value(body)? {
        QuestionsPayload::Search(search) => Ok(search_response(&state, search).await?.into_response()),
        QuestionsPayload::Create(create) => Ok(create_question(&state, create).await?.into_response()),
    }
}

async fn search_questions(
    State(state): State<ApiState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Json(search) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;
    search_response(&state, search).await
}

async fn search_response(
    state: &ApiState,
    search: SearchRequest,
) -> Result<Json<SearchResponse>, ApiError> {
    let questions = question::search(&state.pool, &search.search_term).await?;

    Ok(Json(SearchResponse {
        success: true,
        total_questions: questions.len(),
        questions,
    }))
}

async fn create_question(
    state: &ApiState,
    request: CreateQuestionRequest,
) -> Result<Json<CreatedResponse>, ApiError> {
    let new_question = NewQuestion::from(request);

    let mut tx = state.pool.begin().await?;

    if !category::exists(&mut *tx, new_question.category).await? {
        return Err(ApiError::Validation(format!(
            "Category {} does not exist",
            new_question.category
        )));
    }

    let id = question::insert(&mut *tx, &new_question).await?;
    tx.commit().await?;

    tracing::info!(question_id = id, category = new_question.category, "question created");

    Ok(Json(CreatedResponse {
        success: true,
        added: id,
    }))
}

async fn delete_question(
    State(state): State<ApiState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let Path(question_id) = path?;

    if question::get_by_id(&state.pool, question_id).await?.is_none() {
        return Err(ApiError::NotFound(format!("Question {question_id}")));
    }

    let removed = question::delete(&state.pool, question_id)
        .await
        .map_err(ApiError::ExpectationFailed)?;

    // Removed by a concurrent request between the lookup and the delete
    if removed == 0 {
        return Err(ApiError::NotFound(format!("Question {question_id}")));
    }

    tracing::info!(question_id, "question deleted");

    Ok(Json(DeletedResponse {
        success: true,
        deleted: true,
    }))
}
