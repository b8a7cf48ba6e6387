//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::LunarError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found
    NotFound(String),
    /// Invalid request (validation error)
    BadRequest(String),
    /// Error from the lunar services
    Lunar(LunarError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", msg)),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
            AppError::Lunar(e) => match e {
                LunarError::InvalidDate(ref input) => (
                    StatusCode::BAD_REQUEST,
                    ApiError::new("INVALID_DATE", e.to_string()).with_details(input.clone()),
                ),
                LunarError::UnknownPhase(ref tag) => (
                    StatusCode::BAD_REQUEST,
                    ApiError::new("UNKNOWN_PHASE", e.to_string()).with_details(tag.clone()),
                ),
                LunarError::Config(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::new("CONFIGURATION_ERROR", e.to_string()),
                ),
            },
        };

        (status, Json(error)).into_response()
    }
}

impl From<LunarError> for AppError {
    fn from(err: LunarError) -> Self {
        AppError::Lunar(err)
    }
}
