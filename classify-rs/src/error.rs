//! Error types for classify-rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Result type alias for classifier operations
pub type Result<T> = std::result::Result<T, ClassifierError>;

/// Classifier error types
#[derive(Error, Debug)]
pub enum ClassifierError {
    /// Request body did not carry a `content` text field
    #[error("Invalid request: {detail}")]
    InvalidRequest { status: StatusCode, detail: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClassifierError {
    /// Short machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            ClassifierError::InvalidRequest { .. } => "invalid_request",
            ClassifierError::Config(_) => "config",
            ClassifierError::Io(_) => "io",
        }
    }

    /// HTTP status reported to the caller
    pub fn status(&self) -> StatusCode {
        match self {
            ClassifierError::InvalidRequest { status, .. } => *status,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<serde_json::Error> for ClassifierError {
    fn from(err: serde_json::Error) -> Self {
        // Well-formed JSON of the wrong shape is 422, anything else 400
        let status = match err.classify() {
            serde_json::error::Category::Data => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::BAD_REQUEST,
        };

        ClassifierError::InvalidRequest {
            status,
            detail: err.to_string(),
        }
    }
}

/// Error body returned to API clients
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub detail: String,
}

impl ApiError {
    /// Build an error body from a kind and a message
    pub fn new(error: &str, detail: &str) -> Self {
        Self {
            error: error.to_string(),
            detail: detail.to_string(),
        }
    }
}

impl IntoResponse for ClassifierError {
    fn into_response(self) -> Response {
        let detail = match &self {
            ClassifierError::InvalidRequest { detail, .. } => detail.clone(),
            other => other.to_string(),
        };

        (self.status(), Json(ApiError::new(self.kind(), &detail))).into_response()
    }
}
