//! Error types for the HTTP API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::application::AppError;

/// Errors surfaced by the HTTP API.
///
/// Each error maps to a status code plus a JSON body of the shape
/// `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request failed input validation.
    #[error("{0}")]
    Validation(String),

    /// A deletion secret is configured and the request token is missing
    /// or does not match.
    #[error("Unauthorized: Admin token required")]
    Unauthorized,

    /// The backing store failed while handling a write.
    #[error("store failure: {0}")]
    Store(#[source] anyhow::Error),
}

impl ApiError {
    /// Returns the HTTP status code for this error.
    ///
    /// - Validation: 400 Bad Request
    /// - Unauthorized: 401 Unauthorized
    /// - Store: 500 Internal Server Error
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Validation(message) => Self::Validation(message),
            AppError::Unauthorized => Self::Unauthorized,
            AppError::Store(err) => Self::Store(err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Store failures are logged in full here; the body carries a fixed
        // message so backend details never reach clients.
        let status = self.status_code();
        let message = match &self {
            Self::Validation(message) => message.clone(),
            Self::Unauthorized => "Unauthorized: Admin token required".to_string(),
            Self::Store(err) => {
                error!("Store failure while handling request: {err:#}");
                "Failed to update squad wins".to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
