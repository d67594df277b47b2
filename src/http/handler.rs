//! HTTP handlers for the constellation API

use super::server::AppState;
use crate::builder::BuildError;
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::error;

/// Request for building a constellation
///
/// Words arrive as one comma-separated string, matching what the front
/// end sends.
#[derive(Deserialize)]
pub struct ConstellationRequest {
    pub words: String,
}

/// Handler for constellation builds
pub async fn constellation_handler(
    State(state): State<AppState>,
    Json(payload): Json<ConstellationRequest>,
) -> impl IntoResponse {
    let words: Vec<String> = payload
        .words
        .split(',')
        .map(|w| w.trim().to_string())
        .filter(|w| !w.is_empty())
        .collect();

    let builder = Arc::clone(&state.builder);
    let result = tokio::task::spawn_blocking(move || builder.build(&words)).await;

    match result {
        Ok(Ok(constellation)) => Json(constellation).into_response(),
        Ok(Err(BuildError::EmptyInput)) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "no words provided" })),
        )
            .into_response(),
        Err(join_error) => {
            error!(%join_error, "constellation build task failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "constellation build failed" })),
            )
                .into_response()
        }
    }
}

/// Handler for system status
pub async fn status_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": crate::VERSION,
        "lexicon": {
            "words": state.lexicon.word_count(),
            "senses": state.lexicon.sense_count(),
        },
    }))
}
