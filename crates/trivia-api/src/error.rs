use axum::{
    Json,
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use trivia_quiz::{PageError, QuizError};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("No unseen questions remain in this category")]
    QuizExhausted,
    #[error("Expectation failed: {0}")]
    ExpectationFailed(#[source] sqlx::Error),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// JSON error envelope: `{"success": false, "error": <code>, "message": <text>}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: &'static str,
}

impl ApiError {
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::BadRequest(_) | Self::QuizExhausted => StatusCode::BAD_REQUEST,
            Self::ExpectationFailed(_) => StatusCode::EXPECTATION_FAILED,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Details stay in the logs.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "Not found",
            Self::Validation(_) => "Request could not be processed",
            Self::BadRequest(_) => "Bad request",
            Self::QuizExhausted => "No unseen questions remain in this category",
            Self::ExpectationFailed(_) => "Expectation failed",
            Self::Database(_) => "Internal server error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }

        let body = ErrorBody {
            success: false,
            error: status.as_u16(),
            message: self.message(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<PageError> for ApiError {
    fn from(err: PageError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<QuizError> for ApiError {
    fn from(err: QuizError) -> Self {
        match err {
            QuizError::Exhausted => Self::QuizExhausted,
        }
    }
}

// Ids are integers in every route, so a malformed id names nothing.
impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::NotFound(rejection.body_text())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Validation(err.to_string())
    }
}
