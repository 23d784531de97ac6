//! HTTP API v1.
//!
//! Endpoints:
//!
//! - `GET  /v1/tools`         — List tool definitions
//! - `POST /v1/tools/{name}`  — Call a tool; the body is its arguments
//! - `GET  /v1/symptoms`      — Recent symptom entries (`?limit=`)
//! - `GET  /v1/medications`   — Recent medication entries (`?limit=`)
//! - `GET  /v1/patterns`      — Pattern analysis
//! - `GET  /v1/summary`       — Health summary
//! - `GET  /v1/status`        — Entry counts and uptime

use axum::{
    Router,
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use healthjournal_core::entry::{MedicationEntry, SymptomEntry};
use healthjournal_core::error::ToolError;
use healthjournal_core::tool::{ToolCall, ToolDefinition};
use healthjournal_tools::{AnalyzePatternsResponse, HealthSummaryResponse};

use crate::SharedState;

// ── Router ────────────────────────────────────────────────────────────────

pub fn v1_router(state: SharedState) -> Router {
    Router::new()
        .route("/tools", get(list_tools_handler))
        .route("/tools/{name}", post(call_tool_handler))
        .route("/symptoms", get(list_symptoms_handler))
        .route("/medications", get(list_medications_handler))
        .route("/patterns", get(patterns_handler))
        .route("/summary", get(summary_handler))
        .route("/status", get(status_handler))
        .with_state(state)
}

// ── DTOs ──────────────────────────────────────────────────────────────────

#[derive(Serialize, Deserialize)]
struct ToolListResponse {
    tools: Vec<ToolDefinition>,
    count: usize,
}

#[derive(Serialize, Deserialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Deserialize)]
struct LimitQuery {
    limit: Option<usize>,
}

#[derive(Serialize, Deserialize)]
struct EntryListResponse<T> {
    entries: Vec<T>,
    count: usize,
}

#[derive(Serialize, Deserialize)]
struct StatusResponse {
    store: String,
    symptoms: usize,
    medications: usize,
    tools_count: usize,
    uptime_secs: i64,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, error: impl Into<String>) -> ApiError {
    (status, Json(ErrorResponse { error: error.into() }))
}

// ── Handlers ──────────────────────────────────────────────────────────────

async fn list_tools_handler(State(state): State<SharedState>) -> Json<ToolListResponse> {
    let tools = state.tools.definitions();
    let count = tools.len();
    Json(ToolListResponse { tools, count })
}

async fn call_tool_handler(
    State(state): State<SharedState>,
    Path(name): Path<String>,
    body: Bytes,
) -> Result<Json<serde_json::Value>, ApiError> {
    let arguments = if body.iter().all(u8::is_ascii_whitespace) {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).map_err(|e| {
            api_error(StatusCode::BAD_REQUEST, format!("Invalid JSON body: {e}"))
        })?
    };

    info!(tool = %name, "Tool call received");
    let call = ToolCall {
        id: String::new(),
        name,
        arguments,
    };

    match state.tools.execute(&call).await {
        Ok(result) => Ok(Json(
            result
                .data
                .unwrap_or_else(|| serde_json::json!({ "output": result.output })),
        )),
        Err(ToolError::NotFound(name)) => Err(api_error(
            StatusCode::NOT_FOUND,
            format!("Tool not found: {name}"),
        )),
        Err(e @ ToolError::InvalidArguments(_)) => {
            warn!(tool = %call.name, error = %e, "Rejected tool arguments");
            Err(api_error(StatusCode::BAD_REQUEST, e.to_string()))
        }
        Err(e) => {
            tracing::error!(tool = %call.name, error = %e, "Tool execution failed");
            Err(api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

async fn list_symptoms_handler(
    State(state): State<SharedState>,
    Query(query): Query<LimitQuery>,
) -> Json<EntryListResponse<SymptomEntry>> {
    let entries = state.journal.recent_symptoms(query.limit);
    let count = entries.len();
    Json(EntryListResponse { entries, count })
}

async fn list_medications_handler(
    State(state): State<SharedState>,
    Query(query): Query<LimitQuery>,
) -> Json<EntryListResponse<MedicationEntry>> {
    let entries = state.journal.recent_medications(query.limit);
    let count = entries.len();
    Json(EntryListResponse { entries, count })
}

async fn patterns_handler(State(state): State<SharedState>) -> Json<AnalyzePatternsResponse> {
    Json(state.journal.analyze_patterns())
}

async fn summary_handler(State(state): State<SharedState>) -> Json<HealthSummaryResponse> {
    Json(state.journal.get_health_summary())
}

async fn status_handler(State(state): State<SharedState>) -> Json<StatusResponse> {
    let store = state.journal.store();
    Json(StatusResponse {
        store: store.name().to_string(),
        symptoms: store.symptom_count(),
        medications: store.medication_count(),
        tools_count: state.tools.len(),
        uptime_secs: (chrono::Utc::now() - state.start_time).num_seconds(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_state;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn post_json(
        state: &SharedState,
        uri: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let app = v1_router(state.clone());
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn get_json(state: &SharedState, uri: &str) -> (StatusCode, serde_json::Value) {
        let app = v1_router(state.clone());
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn list_tools() {
        let state = test_state();
        let (status, json) = get_json(&state, "/tools").await;
        assert_eq!(status, StatusCode::OK);

        let list: ToolListResponse = serde_json::from_value(json).unwrap();
        assert_eq!(list.count, 4);
        assert!(list.tools.iter().any(|t| t.name == "log_symptom"));
        assert!(list.tools.iter().any(|t| t.name == "get_health_summary"));
    }

    #[tokio::test]
    async fn call_log_symptom_and_read_back() {
        let state = test_state();
        let (status, json) = post_json(
            &state,
            "/tools/log_symptom",
            serde_json::json!({"symptom_name": "headache", "severity": 7}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "success");
        assert_eq!(json["message"], "Logged headache (severity 7)");

        let (_, json) = get_json(&state, "/symptoms").await;
        assert_eq!(json["count"], 1);
        assert_eq!(json["entries"][0]["symptom"], "headache");
    }

    #[tokio::test]
    async fn out_of_range_severity_is_200_with_error_status() {
        let state = test_state();
        let (status, json) = post_json(
            &state,
            "/tools/log_symptom",
            serde_json::json!({"symptom_name": "headache", "severity": 11}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "error");
        assert_eq!(state.journal.store().symptom_count(), 0);
    }

    #[tokio::test]
    async fn wrong_argument_type_is_400() {
        let state = test_state();
        let (status, json) = post_json(
            &state,
            "/tools/log_symptom",
            serde_json::json!({"symptom_name": "headache", "severity": "seven"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("severity"));
    }

    #[tokio::test]
    async fn unknown_tool_is_404() {
        let state = test_state();
        let (status, _) = post_json(&state, "/tools/diagnose", serde_json::json!({})).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn malformed_body_is_400() {
        let app = v1_router(test_state());
        let req = Request::builder()
            .method("POST")
            .uri("/tools/log_symptom")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn empty_body_calls_tool_without_arguments() {
        let app = v1_router(test_state());
        let req = Request::builder()
            .method("POST")
            .uri("/tools/analyze_patterns")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["status"], "no_data");
    }

    #[tokio::test]
    async fn patterns_and_summary_views() {
        let state = test_state();
        for (name, severity) in [("headache", 7), ("headache", 9), ("nausea", 4)] {
            state.journal.log_symptom(name, severity, "");
        }

        let (_, patterns) = get_json(&state, "/patterns").await;
        let patterns: AnalyzePatternsResponse = serde_json::from_value(patterns).unwrap();
        assert_eq!(patterns.patterns()[0].symptom, "headache");
        assert_eq!(patterns.patterns()[0].avg_severity, 8.0);

        let (_, summary) = get_json(&state, "/summary").await;
        let text = summary["summary"].as_str().unwrap();
        assert!(text.contains("Symptoms logged: 3"));
        assert!(text.contains("headache: 2x (avg severity 8.0)"));
    }

    #[tokio::test]
    async fn medication_limit_query() {
        let state = test_state();
        for name in ["aspirin", "ibuprofen", "vitamin D"] {
            state.journal.track_medication(name, "1 tablet", "");
        }

        let (_, json) = get_json(&state, "/medications?limit=2").await;
        assert_eq!(json["count"], 2);
        assert_eq!(json["entries"][0]["medication"], "ibuprofen");
        assert_eq!(json["entries"][1]["medication"], "vitamin D");
    }

    #[tokio::test]
    async fn status_counts_entries() {
        let state = test_state();
        state.journal.log_symptom("headache", 7, "");
        state.journal.track_medication("aspirin", "100mg", "");

        let (_, json) = get_json(&state, "/status").await;
        let status: StatusResponse = serde_json::from_value(json).unwrap();
        assert_eq!(status.store, "in_memory");
        assert_eq!(status.symptoms, 1);
        assert_eq!(status.medications, 1);
        assert_eq!(status.tools_count, 4);
    }
}
