use serde::{Deserialize, Serialize};

/// Category model - a labelled grouping of questions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    /// Unique category identifier
    pub id: i32,
    /// Display label (e.g. "Science")
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
}

/// Question model - a quiz item with its answer
///
/// Serialises to the external `{id, question, answer, category, difficulty}` shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    /// Unique question identifier
    pub id: i32,
    /// Question text
    pub question: String,
    /// Expected answer
    pub answer: String,
    /// Category ID this question belongs to
    pub category: i32,
    /// Difficulty score (1-5)
    pub difficulty: i32,
}

/// Insert struct for Question; the id is assigned by the database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}
