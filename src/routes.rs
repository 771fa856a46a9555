use axum::{
    extract::rejection::JsonRejection,
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::TranslationError;
use crate::state::AppState;
use crate::translate::{QueryRequest, QueryResponse};

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // Translate API
        .route("/translate/", post(translate_nl_to_query))
        // Health check
        .route("/api/health", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn translate_nl_to_query(
    State(state): State<AppState>,
    body: Result<Json<QueryRequest>, JsonRejection>,
) -> Result<Json<QueryResponse>, (StatusCode, Json<Value>)> {
    let Json(request) = body.map_err(|e| TranslationError::Validation(e.body_text()))?;

    if request.question.trim().is_empty() {
        return Err(TranslationError::Validation("question must not be empty".to_string()).into());
    }

    let request_id = Uuid::new_v4();
    info!(
        "[{}] translating question ({} chars)",
        request_id,
        request.question.len()
    );

    let query = state
        .sql_generator
        .generate_sql(&request.question, request.table_schema.as_deref())
        .await
        .map_err(|e| {
            warn!("[{}] translation failed: {}", request_id, e);
            e
        })?;

    info!("[{}] translation succeeded ({} chars)", request_id, query.len());

    Ok(Json(QueryResponse { query }))
}
