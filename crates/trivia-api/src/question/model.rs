use serde::{Deserialize, Serialize};
use serde_json::Value;
use trivia_db::models::{NewQuestion, Question};
use validator::{Validate, ValidationError};

use crate::{
    category::model::CategoryMap, deserializers::deserialize_i32_from_number_or_string,
    error::ApiError,
};

/// Body of `POST /questions` when adding a question
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub question: String,
    #[validate(custom(function = "validate_not_blank"))]
    pub answer: String,
    #[serde(deserialize_with = "deserialize_i32_from_number_or_string")]
    pub category: i32,
    /// Difficulty score (1-5)
    #[serde(deserialize_with = "deserialize_i32_from_number_or_string")]
    #[validate(range(min = 1, max = 5))]
    pub difficulty: i32,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

impl From<CreateQuestionRequest> for NewQuestion {
    fn from(request: CreateQuestionRequest) -> Self {
        Self {
            question: request.question.trim().to_string(),
            answer: request.answer.trim().to_string(),
            category: request.category,
            difficulty: request.difficulty,
        }
    }
}

/// Body of a question search
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

/// `POST /questions` carries either a search or a new question; the payload shape decides.
#[derive(Debug)]
pub enum QuestionsPayload {
    Search(SearchRequest),
    Create(CreateQuestionRequest),
}

impl QuestionsPayload {
    /// A body with a `searchTerm` key is a search, anything else must be a valid new question.
    pub fn from_value(value: Value) -> Result<Self, ApiError> {
        let is_search = value
            .as_object()
            .is_some_and(|body| body.contains_key("searchTerm"));

        if is_search {
            let search = serde_json::from_value(value)
                .map_err(|e| ApiError::Validation(e.to_string()))?;
            return Ok(Self::Search(search));
        }

        let create: CreateQuestionRequest =
            serde_json::from_value(value).map_err(|e| ApiError::Validation(e.to_string()))?;
        create.validate()?;

        Ok(Self::Create(create))
    }
}

#[derive(Debug, Serialize)]
pub struct QuestionsPageResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub categories: CategoryMap,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub added: i32,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: bool,
}
