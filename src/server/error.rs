use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Failures reported to HTTP clients
///
/// The display text is the public message; the underlying cause is logged
/// by the handler and never sent to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("GitHub user not found or error occurred")]
    GitHubNotFound,

    #[error("LeetCode username not found")]
    LeetCodeNotFound,

    #[error("Failed to fetch LeetCode data.")]
    LeetCodeFailed,

    #[error("Both usernames are required")]
    MissingUsernames,

    #[error("Failed to generate summary")]
    SummaryFailed,
}

impl ApiError {
    pub fn status(self) -> StatusCode {
        match self {
            ApiError::GitHubNotFound | ApiError::LeetCodeNotFound => StatusCode::NOT_FOUND,
            ApiError::MissingUsernames => StatusCode::BAD_REQUEST,
            ApiError::LeetCodeFailed | ApiError::SummaryFailed => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
