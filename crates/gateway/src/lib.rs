//! HTTP API gateway for healthjournal.
//!
//! Serves one process-wide journal: every client of this gateway reads and
//! appends the same entries. Exposes a health check plus the v1 API (tool
//! calls and read-only journal views).
//!
//! Built on Axum.

pub mod api_v1;

use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::{Router, response::Json, routing::get};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};

use healthjournal_config::AppConfig;
use healthjournal_core::clock::SystemClock;
use healthjournal_core::tool::ToolRegistry;
use healthjournal_store::InMemoryJournal;
use healthjournal_tools::{HealthJournal, JournalSettings, journal_registry};

/// Request bodies are tool arguments; nothing legitimate comes close.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Shared application state for the gateway.
pub struct GatewayState {
    pub journal: Arc<HealthJournal>,
    pub tools: ToolRegistry,
    pub start_time: chrono::DateTime<chrono::Utc>,
}

pub type SharedState = Arc<GatewayState>;

impl GatewayState {
    /// Bind the tool registry to `journal`.
    pub fn new(journal: Arc<HealthJournal>) -> Self {
        Self {
            tools: journal_registry(journal.clone()),
            journal,
            start_time: chrono::Utc::now(),
        }
    }
}

/// Build the full router: `/health` plus the v1 API under `/v1`.
pub fn build_router(state: SharedState, cors_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE])
        .max_age(std::time::Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health_handler))
        .nest("/v1", api_v1::v1_router(state))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

/// Start the gateway HTTP server with a fresh in-memory journal.
pub async fn start(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);

    let journal = Arc::new(
        HealthJournal::new(Arc::new(InMemoryJournal::new()), Arc::new(SystemClock))
            .with_settings(JournalSettings::from(&config.journal)),
    );
    let state = Arc::new(GatewayState::new(journal));
    let app = build_router(state, &config.gateway.cors_origins);

    info!(addr = %addr, "Gateway starting");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// --- Handlers ---

#[derive(Serialize, Deserialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}
