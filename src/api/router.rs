//! HTTP shell: a composable `Router` over the triage service.
//!
//! Two endpoints under `/api/`: a health probe and the analysis endpoint.
//! One request per analysis run, no state shared across requests; the core
//! stays blocking and runs under `spawn_blocking`.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use crate::config;
use crate::error::AnalysisError;
use crate::pipeline::orchestrator::TriageService;

/// Warning shown when the current record is blank, in the language of the
/// records themselves.
const EMPTY_RECORD_WARNING: &str = "Por favor, insira o prontuário atual.";

/// Build the triage API router.
pub fn triage_router(service: Arc<TriageService>) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/analyze", post(analyze))
        .with_state(service)
        .layer(CorsLayer::permissive())
}

/// Request body for POST /api/analyze.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Previous record; absent or blank means no comparison.
    #[serde(default)]
    pub previous_text: Option<String>,
    /// Current record; must be non-blank.
    pub current_text: String,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: config::APP_VERSION,
    })
}

async fn analyze(
    State(service): State<Arc<TriageService>>,
    Json(request): Json<AnalyzeRequest>,
) -> Response {
    let joined = tokio::task::spawn_blocking(move || {
        service.analyze(request.previous_text.as_deref(), &request.current_text)
    })
    .await;

    match joined {
        Ok(Ok(report)) => (StatusCode::OK, Json(report)).into_response(),
        Ok(Err(AnalysisError::EmptyRecord)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: EMPTY_RECORD_WARNING.to_string(),
            }),
        )
            .into_response(),
        Ok(Err(AnalysisError::Provider(e))) => {
            tracing::error!(error = %e, "NLP provider failure during analysis");
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "analysis task failed to run");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "internal error".to_string(),
                }),
            )
                .into_response()
        }
    }
}
