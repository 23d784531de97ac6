//! Journal records.
//!
//! Entries are immutable once built: stores only ever append them and hand
//! out clones.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One logged symptom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomEntry {
    /// Symptom name exactly as the caller gave it (not normalized)
    pub symptom: String,

    /// Severity on a 1–10 scale
    pub severity: i64,

    /// Free-form notes (may be empty)
    #[serde(default)]
    pub notes: String,

    /// When the entry was recorded
    pub recorded_at: DateTime<FixedOffset>,
}

/// One medication intake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicationEntry {
    pub medication: String,

    /// Free-form dosage, e.g. "100mg" or "2 tablets"
    pub dosage: String,

    /// Intake time as "HH:MM"
    pub time_taken: String,

    pub recorded_at: DateTime<FixedOffset>,
}

/// Aggregated statistics for one distinct symptom name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternResult {
    pub symptom: String,
    pub count: usize,
    /// Mean severity rounded to one decimal place
    pub avg_severity: f64,
}
