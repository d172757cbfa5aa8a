use crate::models::ValidationErrors;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use database::DbError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine-readable error codes returned to API clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NoteNotFound,
    NoteAlreadyExists,
    NoteValidationError,
    NoteUnknownError,
}

/// The JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorView {
    pub code: ErrorCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),
    #[error("Note not found")]
    NotFound,
    #[error("Note already exists")]
    AlreadyExists,
    #[error("Database error: {0}")]
    Database(#[source] DbError),
}

impl From<DbError> for AppError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound => AppError::NotFound,
            DbError::AlreadyExists => AppError::AlreadyExists,
            other => AppError::Database(other),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(errors)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(ValidationErrors::single(format!(
            "body: {}",
            rejection.body_text()
        )))
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::AlreadyExists => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The client-visible body. Internal failures carry no details.
    pub fn view(&self) -> ErrorView {
        match self {
            AppError::Validation(errors) => ErrorView {
                code: ErrorCode::NoteValidationError,
                message: Some(errors.to_string()),
            },
            AppError::NotFound => ErrorView {
                code: ErrorCode::NoteNotFound,
                message: None,
            },
            AppError::AlreadyExists => ErrorView {
                code: ErrorCode::NoteAlreadyExists,
                message: None,
            },
            AppError::Database(_) => ErrorView {
                code: ErrorCode::NoteUnknownError,
                message: None,
            },
        }
    }
}

/// Converts our custom `AppError` into an HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Database(db_err) => {
                tracing::error!(error = ?db_err, "Database error.");
            }
            other => {
                tracing::debug!(error = %other, "Request rejected.");
            }
        }

        (self.status(), Json(self.view())).into_response()
    }
}
