//! `track_medication` tool — records a medication intake.

use async_trait::async_trait;
use healthjournal_core::error::ToolError;
use healthjournal_core::tool::{Tool, ToolResult};
use std::sync::Arc;

use crate::args::{optional_str, required_str};
use crate::journal::HealthJournal;
use crate::to_data;

pub struct TrackMedicationTool {
    journal: Arc<HealthJournal>,
}

impl TrackMedicationTool {
    pub fn new(journal: Arc<HealthJournal>) -> Self {
        Self { journal }
    }
}

#[async_trait]
impl Tool for TrackMedicationTool {
    fn name(&self) -> &str {
        "track_medication"
    }

    fn description(&self) -> &str {
        "Track a medication intake. The time defaults to now when not given."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "medication_name": {
                    "type": "string",
                    "description": "The medication, e.g. 'aspirin'"
                },
                "dosage": {
                    "type": "string",
                    "description": "Dosage as stated, e.g. '100mg' or '2 tablets'"
                },
                "time_taken": {
                    "type": "string",
                    "description": "24-hour time as HH:MM (default: current time)",
                    "default": ""
                }
            },
            "required": ["medication_name", "dosage"]
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let medication_name = required_str(&arguments, "medication_name")?;
        let dosage = required_str(&arguments, "dosage")?;
        let time_taken = optional_str(&arguments, "time_taken")?;

        let response = self
            .journal
            .track_medication(medication_name, dosage, time_taken);

        Ok(ToolResult {
            call_id: String::new(),
            success: true,
            output: response.text().to_string(),
            data: Some(to_data(self.name(), &response)?),
        })
    }
}
