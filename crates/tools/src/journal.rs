//! `HealthJournal` — the four journal operations over an injected store and
//! clock.
//!
//! One `HealthJournal` wraps one store. Tests build an isolated journal per
//! case; the gateway builds one for the whole process and shares it by `Arc`.

use healthjournal_config::JournalConfig;
use healthjournal_core::clock::Clock;
use healthjournal_core::entry::{MedicationEntry, SymptomEntry};
use healthjournal_core::error::JournalError;
use healthjournal_core::journal::{ANALYSIS_WINDOW, DEFAULT_RECENT_LIMIT, JournalStore};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::analysis::{analyze_snapshot, compose_summary};
use crate::response::{
    AnalyzePatternsResponse, HealthSummaryResponse, LogSymptomResponse, TrackMedicationResponse,
};

pub const MIN_SEVERITY: i64 = 1;
pub const MAX_SEVERITY: i64 = 10;

/// Read windows and summary sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JournalSettings {
    /// Default limit for recent-history reads
    pub recent_limit: usize,
    /// Entries analysis and summaries look at
    pub analysis_window: usize,
    /// Patterns listed in the summary
    pub top_symptoms: usize,
}

impl Default for JournalSettings {
    fn default() -> Self {
        Self {
            recent_limit: DEFAULT_RECENT_LIMIT,
            analysis_window: ANALYSIS_WINDOW,
            top_symptoms: 3,
        }
    }
}

impl From<&JournalConfig> for JournalSettings {
    fn from(config: &JournalConfig) -> Self {
        Self {
            recent_limit: config.recent_limit,
            analysis_window: config.analysis_window,
            top_symptoms: config.top_symptoms,
        }
    }
}

/// Check a severity against the inclusive 1–10 scale.
pub fn check_severity(severity: i64) -> Result<(), JournalError> {
    if (MIN_SEVERITY..=MAX_SEVERITY).contains(&severity) {
        Ok(())
    } else {
        Err(JournalError::SeverityOutOfRange { severity })
    }
}

pub struct HealthJournal {
    store: Arc<dyn JournalStore>,
    clock: Arc<dyn Clock>,
    settings: JournalSettings,
}

impl HealthJournal {
    pub fn new(store: Arc<dyn JournalStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            settings: JournalSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: JournalSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> JournalSettings {
        self.settings
    }

    pub fn store(&self) -> &Arc<dyn JournalStore> {
        &self.store
    }

    /// Log a symptom with a 1–10 severity.
    ///
    /// Out-of-range severities come back as `status: "error"` and store
    /// nothing. Name and notes are stored verbatim, empty strings included.
    pub fn log_symptom(&self, symptom_name: &str, severity: i64, notes: &str) -> LogSymptomResponse {
        info!(symptom = %symptom_name, severity, "log_symptom called");

        if let Err(e) = check_severity(severity) {
            warn!(severity, "Invalid severity value");
            return LogSymptomResponse::Error {
                error_message: e.to_string(),
            };
        }

        self.store.add_symptom(SymptomEntry {
            symptom: symptom_name.to_string(),
            severity,
            notes: notes.to_string(),
            recorded_at: self.clock.now(),
        });

        LogSymptomResponse::Success {
            message: format!("Logged {symptom_name} (severity {severity})"),
        }
    }

    /// Track a medication intake. An empty `time_taken` becomes the current
    /// local time as `HH:MM`.
    pub fn track_medication(
        &self,
        medication_name: &str,
        dosage: &str,
        time_taken: &str,
    ) -> TrackMedicationResponse {
        info!(medication = %medication_name, dosage = %dosage, "track_medication called");

        let now = self.clock.now();
        let time_taken = if time_taken.is_empty() {
            let filled = now.format("%H:%M").to_string();
            debug!(time = %filled, "Auto-filled time");
            filled
        } else {
            time_taken.to_string()
        };

        self.store.add_medication(MedicationEntry {
            medication: medication_name.to_string(),
            dosage: dosage.to_string(),
            time_taken,
            recorded_at: now,
        });

        TrackMedicationResponse::Success {
            message: format!("Tracked {medication_name} ({dosage})"),
        }
    }

    /// Frequency and mean severity per symptom over the analysis window.
    pub fn analyze_patterns(&self) -> AnalyzePatternsResponse {
        info!("analyze_patterns called");

        let snapshot = self.store.get_symptoms(self.settings.analysis_window);
        let response = analyze_snapshot(&snapshot);

        match &response {
            AnalyzePatternsResponse::Success { patterns, .. } => {
                info!(unique = patterns.len(), "Analysis complete");
            }
            AnalyzePatternsResponse::NoData { .. } => {
                info!("No symptoms available for analysis");
            }
        }
        response
    }

    /// Dated text summary plus the raw snapshots it was built from.
    ///
    /// The symptom and medication snapshots are taken separately; an entry
    /// appended between the two reads may or may not appear.
    pub fn get_health_summary(&self) -> HealthSummaryResponse {
        info!("get_health_summary called");

        let symptoms = self.store.get_symptoms(self.settings.analysis_window);
        let medications = self.store.get_medications(self.settings.analysis_window);
        let analysis = analyze_snapshot(&symptoms);

        let summary = compose_summary(
            self.clock.now().date_naive(),
            symptoms.len(),
            medications.len(),
            &analysis,
            self.settings.top_symptoms,
        );

        info!(
            symptoms = symptoms.len(),
            medications = medications.len(),
            "Health summary generated"
        );

        HealthSummaryResponse::Success {
            summary,
            symptoms,
            medications,
        }
    }

    /// Recent symptoms; `None` uses the configured default limit.
    pub fn recent_symptoms(&self, limit: Option<usize>) -> Vec<SymptomEntry> {
        self.store
            .get_symptoms(limit.unwrap_or(self.settings.recent_limit))
    }

    /// Recent medications; `None` uses the configured default limit.
    pub fn recent_medications(&self, limit: Option<usize>) -> Vec<MedicationEntry> {
        self.store
            .get_medications(limit.unwrap_or(self.settings.recent_limit))
    }
}
