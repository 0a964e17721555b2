use axum::{http::StatusCode, Json};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("no API key configured")]
    MissingApiKey,
    #[error("no domain id configured")]
    MissingDomainId,
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed response: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error("click record #{index} is not a JSON object")]
    NotAnObject { index: usize },
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

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<MapError> for AppError {
    fn from(err: MapError) -> Self {
        Self::internal(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let error = if self.status.is_client_error() {
            "Invalid request"
        } else {
            "Failed to process clicks data"
        };
        let body = json!({
            "success": false,
            "error": error,
            "message": self.message,
        });
        (self.status, Json(body)).into_response()
    }
}
