use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use async_graphql::ErrorExtensions;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Quiz generation failed: {0}")]
    GenerationFailed(String),

    #[error("Malformed quiz format: {}", describe_format_error(reason, *index))]
    MalformedQuizFormat { reason: String, index: Option<usize> },

    #[error("Submission has {answers} answers for {questions} questions")]
    SubmissionShapeMismatch { questions: usize, answers: usize },

    #[error("Gap prediction service unavailable: {0}")]
    GapServiceUnavailable(String),

    #[error("Persistence failure: {0}")]
    PersistenceFailure(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

fn describe_format_error(reason: &str, index: Option<usize>) -> String {
    match index {
        Some(i) => format!("question {}: {}", i, reason),
        None => reason.to_string(),
    }
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::GenerationFailed(_) => "GENERATION_FAILED",
            AppError::MalformedQuizFormat { .. } => "MALFORMED_QUIZ_FORMAT",
            AppError::SubmissionShapeMismatch { .. } => "SUBMISSION_SHAPE_MISMATCH",
            AppError::GapServiceUnavailable(_) => "GAP_SERVICE_UNAVAILABLE",
            AppError::PersistenceFailure(_) => "PERSISTENCE_FAILURE",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether a caller may simply repeat the same request.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::GenerationFailed(_)
                | AppError::MalformedQuizFormat { .. }
                | AppError::GapServiceUnavailable(_)
        )
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    pub kind: &'static str,
    pub retryable: bool,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::GenerationFailed(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::MalformedQuizFormat { .. } => StatusCode::BAD_GATEWAY,
            AppError::SubmissionShapeMismatch { .. } => StatusCode::BAD_REQUEST,
            AppError::GapServiceUnavailable(_) => StatusCode::FAILED_DEPENDENCY,
            AppError::PersistenceFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
            kind: self.error_code(),
            retryable: self.is_retryable(),
        })
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::PersistenceFailure(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<async_graphql::Error> for AppError {
    fn from(err: async_graphql::Error) -> Self {
        AppError::InternalError(err.message)
    }
}

impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_err, e| {
            e.set("code", self.error_code());
            e.set("retryable", self.is_retryable());
        })
    }
}

pub type AppResult<T> = Result<T, AppError>;
