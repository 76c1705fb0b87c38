use crate::modules::events::core::errors::DecideError;
use crate::shared::infrastructure::key_value_store::StorageError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("domain rejected: {0}")]
    Domain(#[from] DecideError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

impl ApplicationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApplicationError::Domain(DecideError::Validation { .. }) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApplicationError::Domain(DecideError::DuplicateId(_))
            | ApplicationError::Domain(DecideError::DuplicateRegistration { .. }) => {
                StatusCode::CONFLICT
            }
            ApplicationError::Domain(DecideError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
            ApplicationError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApplicationError::Domain(reason) => error_response(status, reason.to_string()),
            ApplicationError::Storage(e) => e.into_response(),
        }
    }
}

impl IntoResponse for StorageError {
    fn into_response(self) -> Response {
        error!(error = %self, "storage failure");
        error_response(StatusCode::INTERNAL_SERVER_ERROR, "A storage error occurred")
    }
}
