//! Structured results of the four journal operations.
//!
//! Each serializes as a JSON object tagged by `status`, keeping the field
//! names an orchestrator expects (`message`, `error_message`, `patterns`,
//! `total_entries`, `summary`, `symptoms`, `medications`).

use healthjournal_core::entry::{MedicationEntry, PatternResult, SymptomEntry};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LogSymptomResponse {
    Success { message: String },
    Error { error_message: String },
}

impl LogSymptomResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The human-readable text, whichever variant this is.
    pub fn text(&self) -> &str {
        match self {
            Self::Success { message } => message,
            Self::Error { error_message } => error_message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TrackMedicationResponse {
    Success { message: String },
}

impl TrackMedicationResponse {
    pub fn text(&self) -> &str {
        match self {
            Self::Success { message } => message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalyzePatternsResponse {
    Success {
        patterns: Vec<PatternResult>,
        /// Entries in the analyzed snapshot (not the number of groups)
        total_entries: usize,
    },
    NoData { message: String },
}

impl AnalyzePatternsResponse {
    pub fn patterns(&self) -> &[PatternResult] {
        match self {
            Self::Success { patterns, .. } => patterns,
            Self::NoData { .. } => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum HealthSummaryResponse {
    Success {
        summary: String,
        symptoms: Vec<SymptomEntry>,
        medications: Vec<MedicationEntry>,
    },
}

impl HealthSummaryResponse {
    pub fn summary(&self) -> &str {
        match self {
            Self::Success { summary, .. } => summary,
        }
    }
}
