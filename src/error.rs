use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

use crate::types::form::FieldErrors;
use crate::views;

#[derive(Debug, ThisError)]
pub enum RosterError {
    #[error("Storage connection error: {0}")]
    StorageConnection(#[source] SqlxError),

    #[error("Storage query error: {0}")]
    StorageQuery(#[source] SqlxError),

    #[error("Student {id} not found")]
    NotFound { id: i64 },

    #[error("Invalid input: {0}")]
    Validation(FieldErrors),

    #[error("Config error: {0}")]
    Config(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<SqlxError> for RosterError {
    fn from(e: SqlxError) -> Self {
        match e {
            SqlxError::PoolTimedOut
            | SqlxError::PoolClosed
            | SqlxError::WorkerCrashed
            | SqlxError::Io(_)
            | SqlxError::Tls(_)
            | SqlxError::Configuration(_) => RosterError::StorageConnection(e),
            SqlxError::Database(db) if is_unreachable_code(db.code().as_deref()) => {
                RosterError::StorageConnection(SqlxError::Database(db))
            }
            other => RosterError::StorageQuery(other),
        }
    }
}

/// SQLITE_BUSY (5) and SQLITE_CANTOPEN (14), including their extended codes.
fn is_unreachable_code(code: Option<&str>) -> bool {
    code.and_then(|c| c.parse::<i32>().ok())
        .is_some_and(|c| matches!(c & 0xff, 5 | 14))
}

impl RosterError {
    pub fn status(&self) -> StatusCode {
        match self {
            RosterError::StorageConnection(_) => StatusCode::SERVICE_UNAVAILABLE,
            RosterError::NotFound { .. } => StatusCode::NOT_FOUND,
            RosterError::Validation(_) => StatusCode::BAD_REQUEST,
            RosterError::StorageQuery(_) | RosterError::Config(_) | RosterError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for RosterError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let message = match &self {
            RosterError::StorageConnection(_) => {
                error!(error = %self, "student storage unreachable");
                "The student records are unavailable right now. Please try again later."
                    .to_string()
            }
            RosterError::NotFound { id } => format!("No student with id {id} exists."),
            RosterError::Validation(errors) => errors.to_string(),
            RosterError::StorageQuery(_) | RosterError::Config(_) | RosterError::Io(_) => {
                error!(error = %self, "request failed");
                "An internal error occurred while processing the request.".to_string()
            }
        };
        (status, Html(views::error_page(status, &message))).into_response()
    }
}
