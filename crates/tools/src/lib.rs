//! Journal operations and their tool bindings.
//!
//! [`HealthJournal`] implements the four operations over an injected store
//! and clock; each operation is also wrapped as a [`Tool`] so an agent
//! orchestrator can call it by name:
//!
//! - `log_symptom`
//! - `track_medication`
//! - `analyze_patterns`
//! - `get_health_summary`
//!
//! [`Tool`]: healthjournal_core::tool::Tool

pub mod analysis;
pub mod analyze_patterns;
pub mod health_summary;
pub mod journal;
pub mod log_symptom;
pub mod response;
pub mod track_medication;

mod args;

use healthjournal_core::error::ToolError;
use healthjournal_core::tool::ToolRegistry;
use serde::Serialize;
use std::sync::Arc;

pub use journal::{HealthJournal, JournalSettings, check_severity};
pub use response::{
    AnalyzePatternsResponse, HealthSummaryResponse, LogSymptomResponse, TrackMedicationResponse,
};

/// Create a tool registry with the four journal tools bound to `journal`.
pub fn journal_registry(journal: Arc<HealthJournal>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Box::new(log_symptom::LogSymptomTool::new(journal.clone())));
    registry.register(Box::new(track_medication::TrackMedicationTool::new(journal.clone())));
    registry.register(Box::new(analyze_patterns::AnalyzePatternsTool::new(journal.clone())));
    registry.register(Box::new(health_summary::HealthSummaryTool::new(journal)));
    registry
}

/// Serialize an operation result into `ToolResult.data`.
pub(crate) fn to_data<T: Serialize>(tool_name: &str, value: &T) -> Result<serde_json::Value, ToolError> {
    serde_json::to_value(value).map_err(|e| ToolError::ExecutionFailed {
        tool_name: tool_name.to_string(),
        reason: e.to_string(),
    })
}
