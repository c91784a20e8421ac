use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The initial recommendation fetch failed. Fatal to the whole
    /// enrichment attempt; never produced by poster lookups.
    #[error("Recommendation service error: {0}")]
    RecommendationService(String),

    #[error("External API error: {0}")]
    ExternalApi(String),

    /// A newer enrichment began before this one finished, so this
    /// result is no longer authoritative.
    #[error("Request superseded by a newer one")]
    Superseded,

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::RecommendationService(msg) => (StatusCode::BAD_GATEWAY, msg),
            AppError::ExternalApi(msg) => (StatusCode::BAD_GATEWAY, msg),
            AppError::HttpClient(_) => (StatusCode::BAD_GATEWAY, self.to_string()),
            AppError::Superseded => (StatusCode::CONFLICT, self.to_string()),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
