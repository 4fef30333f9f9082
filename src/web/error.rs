//! Error type for request handling and its HTTP mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::task::domain::TaskDomainError;
use crate::task::ports::TaskRepositoryError;

/// Errors surfaced by the web layer.
///
/// Every variant renders as a JSON body of the shape `{"error": "..."}` so
/// API consumers see a uniform error contract regardless of which layer
/// failed.
#[derive(Debug, Error)]
pub enum WebError {
    /// No task exists for the requested identifier.
    #[error("Task not found")]
    TaskNotFound,

    /// A submitted field failed domain validation.
    #[error(transparent)]
    InvalidInput(#[from] TaskDomainError),

    /// The submitted form body could not be read.
    #[error("{0}")]
    MalformedForm(String),

    /// A view template failed to compile or render.
    #[error("template '{template}' failed: {reason}")]
    TemplateRender {
        /// Name of the failing template.
        template: String,
        /// Rendering failure detail.
        reason: String,
    },

    /// The backing task store failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::TaskNotFound | Self::Repository(TaskRepositoryError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "Task not found".to_owned())
            }
            Self::InvalidInput(error) => (StatusCode::BAD_REQUEST, error.to_string()),
            Self::MalformedForm(reason) => (StatusCode::BAD_REQUEST, reason),
            Self::TemplateRender {
                ref template,
                ref reason,
            } => {
                tracing::error!(%template, %reason, "template rendering failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_owned(),
                )
            }
            Self::Repository(ref error) => {
                tracing::error!(error = %error, "task store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_owned(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
