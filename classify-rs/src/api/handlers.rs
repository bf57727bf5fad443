//! API request handlers

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::classifier::{Classifier, Label};
use crate::error::{ClassifierError, Result};
use crate::featurizer::TextFeaturizer;

/// Shared application state
pub struct AppState {
    /// Decision strategy used by `/classify`
    pub classifier: Arc<dyn Classifier>,
    /// Fitted vectorizer, not consulted by the keyword classifier
    pub featurizer: Arc<dyn TextFeaturizer>,
}

impl AppState {
    pub fn new(classifier: Arc<dyn Classifier>, featurizer: Arc<dyn TextFeaturizer>) -> Self {
        Self {
            classifier,
            featurizer,
        }
    }
}

/// Classify request body
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub content: String,
}

impl ClassifyRequest {
    /// Parse a request body. A missing content type is read as JSON; any
    /// other non-JSON content type is rejected.
    pub fn from_body(headers: &HeaderMap, body: &[u8]) -> Result<Self> {
        if let Some(content_type) = headers.get(header::CONTENT_TYPE) {
            if !is_json_content_type(content_type.to_str().unwrap_or_default()) {
                return Err(ClassifierError::InvalidRequest {
                    status: StatusCode::UNSUPPORTED_MEDIA_TYPE,
                    detail: "Expected request with `Content-Type: application/json`"
                        .to_string(),
                });
            }
        }

        Ok(serde_json::from_slice(body)?)
    }
}

fn is_json_content_type(value: &str) -> bool {
    let mime = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

/// Classify response
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ClassifyResponse {
    pub prediction: Label,
    pub confidence: f64,
}

/// GET /health - Health check
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "classify-rs",
        "version": env!("CARGO_PKG_VERSION"),
        "classifier": state.classifier.name(),
    }))
}

/// POST /classify - Label email text as spam or ham
pub async fn classify(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ClassifyResponse>> {
    let request = ClassifyRequest::from_body(&headers, &body)?;

    let result = state.classifier.classify(&request.content);
    debug!("Classified {} bytes as {}", request.content.len(), result.label);

    Ok(Json(ClassifyResponse {
        prediction: result.label,
        confidence: result.confidence,
    }))
}
