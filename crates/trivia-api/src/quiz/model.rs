use serde::{Deserialize, Serialize};
use trivia_db::models::Question;

use crate::deserializers::deserialize_i32_from_number_or_string;

/// Category id meaning "any category" in the frontend's quiz picker.
pub const ALL_CATEGORIES: i32 = 0;

/// Body of `POST /quizzes`
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Vec<i32>,
    pub quiz_category: QuizCategory,
}

/// Either a bare id or the frontend's `{"type": "Science", "id": 1}` object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum QuizCategory {
    Id(#[serde(deserialize_with = "deserialize_i32_from_number_or_string")] i32),
    Labeled {
        #[serde(deserialize_with = "deserialize_i32_from_number_or_string")]
        id: i32,
    },
}

impl QuizCategory {
    /// The category to draw from, or `None` for all categories.
    pub const fn category_id(&self) -> Option<i32> {
        let (Self::Id(id) | Self::Labeled { id }) = self;
        if *id == ALL_CATEGORIES { None } else { Some(*id) }
    }
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Question,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> Result<QuizRequest, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn test_bare_category_id() {
        let request = parse(json!({ "previous_questions": [2, 5], "quiz_category": 3 })).unwrap();
        assert_eq!(request.previous_questions, vec![2, 5]);
        assert_eq!(request.quiz_category.category_id(), Some(3));
    }

    #[test]
    fn test_frontend_category_object() {
        let request = parse(json!({
            "previous_questions": [],
            "quiz_category": { "type": "Science", "id": "1" },
        }))
        .unwrap();
        assert_eq!(request.quiz_category, QuizCategory::Labeled { id: 1 });
        assert_eq!(request.quiz_category.category_id(), Some(1));
    }

    #[test]
    fn test_all_categories() {
        let request = parse(json!({
            "previous_questions": [],
            "quiz_category": { "type": "click", "id": 0 },
        }))
        .unwrap();
        assert_eq!(request.quiz_category.category_id(), None);
    }

    #[test]
    fn test_malformed_requests() {
        assert!(parse(json!({ "previous_questions": [200], "quiz-category": 50 })).is_err());
        assert!(parse(json!({ "quiz_category": 1 })).is_err());
        assert!(parse(json!({ "previous_questions": "1", "quiz_category": 1 })).is_err());
        assert!(parse(json!({ "previous_questions": [], "quiz_category": "science" })).is_err());
    }
}
