use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::PathRejection},
    routing::get,
};
use trivia_db::repositories::{category, question};

use crate::{ApiState, error::ApiError, pagination::PageQuery};

use super::model::{CategoriesResponse, CategoryQuestionsResponse, category_map};

/// Create the category routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{category_id}/questions", get(list_category_questions))
}

async fn list_categories(
    State(state): State<ApiState>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = category::list_all(&state.pool).await?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(categories),
    }))
}

async fn list_category_questions(
    State(state): State<ApiState>,
    path: Result<Path<i32>, PathRejection>,
    Query(query): Query<PageQuery>,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let Path(category_id) = path?;
    let window = query.window()?;

    if !category::exists(&state.pool, category_id).await? {
        return Err(ApiError::NotFound(format!("Category {category_id}")));
    }

    let questions = question::list_page_by_category(
        &state.pool,
        category_id,
        window.limit(),
        window.offset(),
    )
    .await?;
    let total_questions = question::count_by_category(&state.pool, category_id).await?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions,
        total_questions,
        current_category: category_id,
    }))
}
