use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use thiserror::Error;

/// Failure modes of a translation request. Every variant surfaces directly
/// to the HTTP caller; nothing is retried or swallowed.
#[derive(Debug, Error)]
pub enum TranslationError {
    /// The request body is missing or malformed.
    #[error("invalid request: {0}")]
    Validation(String),

    /// A required credential is absent. A deployment defect, not a
    /// transient condition.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The LLM provider call failed: network, non-success status, or a
    /// response the client could not read.
    #[error("provider error: {0}")]
    Provider(String),
}

impl TranslationError {
    pub fn status(&self) -> StatusCode {
        match self {
            TranslationError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            TranslationError::Configuration(_) | TranslationError::Provider(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<TranslationError> for (StatusCode, Json<Value>) {
    fn from(err: TranslationError) -> Self {
        (err.status(), Json(json!({ "error": err.to_string() })))
    }
}
