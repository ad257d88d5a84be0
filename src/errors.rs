use crate::models::GoalId;
use axum::http::StatusCode;
use thiserror::Error;

/// Rejections from the goal court.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CourtError {
    #[error("task must not be empty")]
    EmptyTask,

    #[error("difficulty {0} is outside 1..=10")]
    DifficultyOutOfRange(u8),

    #[error("goal not found: {0}")]
    NotFound(GoalId),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl From<CourtError> for AppError {
    fn from(err: CourtError) -> Self {
        match err {
            CourtError::NotFound(_) => Self::not_found(err.to_string()),
            CourtError::EmptyTask | CourtError::DifficultyOutOfRange(_) => {
                Self::bad_request(err.to_string())
            }
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
