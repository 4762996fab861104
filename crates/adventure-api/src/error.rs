//! Adventure API: error types.

use std::path::PathBuf;

use adventure_story::{PageId, StoryError};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Startup errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The story file could not be read.
    #[error("failed to read story file {path}: {source}")]
    StoryFile {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The story file is not valid YAML for a story definition.
    #[error("invalid story file: {0}")]
    StoryFormat(#[from] serde_yaml::Error),

    /// The story definition does not form a valid graph.
    #[error("invalid story: {0}")]
    Story(#[from] StoryError),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// Request-level errors that render as JSON responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The requested page is not part of the story.
    #[error("page not found: {0}")]
    PageNotFound(PageId),

    /// The story graph rejected the request.
    #[error(transparent)]
    Story(#[from] StoryError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self {
            ApiError::PageNotFound(_) => (StatusCode::NOT_FOUND, "page_not_found"),
            ApiError::Story(StoryError::InvalidChoice { .. }) => {
                (StatusCode::BAD_REQUEST, "invalid_choice")
            }
            ApiError::Story(StoryError::MalformedGraph(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "malformed_graph")
            }
        };

        let body = ErrorBody {
            error: error_code,
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
