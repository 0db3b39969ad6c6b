//! End-to-end tests driving the HTTP shell in-memory, pattern mode.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use aurora::api::triage_router;
use aurora::pipeline::extractor::PatternExtractor;
use aurora::pipeline::orchestrator::TriageService;
use aurora::pipeline::summarize::TruncateSummarizer;
use aurora::pipeline::types::TriageReport;

fn app() -> Router {
    let service = Arc::new(TriageService::new(
        Arc::new(PatternExtractor),
        Arc::new(TruncateSummarizer::default()),
    ));
    triage_router(service)
}

fn analyze_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn report_from(response: axum::response::Response) -> TriageReport {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_endpoint_is_up() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn first_visit_reports_entities_without_tags() {
    let response = app()
        .oneshot(analyze_request(serde_json::json!({
            "current_text": "Paciente toma Dipirona 500mg e sente febre."
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let report = report_from(response).await;
    assert!(!report.had_previous);
    assert!(report.tags.is_empty());
    assert!(report.entities.medications.iter().any(|m| m.contains("500mg")));
    assert!(report.entities.symptoms.contains("febre"));
    assert!(report.summary.contains("Dipirona"));
}

#[tokio::test]
async fn follow_up_visit_flags_new_findings() {
    let response = app()
        .oneshot(analyze_request(serde_json::json!({
            "previous_text": "sente febre",
            "current_text": "sente febre e tontura, toma Dipirona 500mg"
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let report = report_from(response).await;
    assert!(report.had_previous);
    assert_eq!(report.tags.len(), 2);
}

#[tokio::test]
async fn unchanged_record_yields_no_tags() {
    let response = app()
        .oneshot(analyze_request(serde_json::json!({
            "previous_text": "toma Dipirona 500mg",
            "current_text": "toma Dipirona 500mg"
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let report = report_from(response).await;
    assert!(report.had_previous);
    assert!(report.tags.is_empty());
}

#[tokio::test]
async fn blank_current_record_is_rejected_with_warning() {
    let response = app()
        .oneshot(analyze_request(serde_json::json!({ "current_text": "" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "Por favor, insira o prontuário atual.");
}
