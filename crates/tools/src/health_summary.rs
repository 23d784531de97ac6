//! `get_health_summary` tool — a doctor-visit summary of the journal.

use async_trait::async_trait;
use healthjournal_core::error::ToolError;
use healthjournal_core::tool::{Tool, ToolResult};
use std::sync::Arc;

use crate::journal::HealthJournal;
use crate::to_data;

pub struct HealthSummaryTool {
    journal: Arc<HealthJournal>,
}

impl HealthSummaryTool {
    pub fn new(journal: Arc<HealthJournal>) -> Self {
        Self { journal }
    }
}

#[async_trait]
impl Tool for HealthSummaryTool {
    fn name(&self) -> &str {
        "get_health_summary"
    }

    fn description(&self) -> &str {
        "Generate a dated health summary for a doctor visit: symptom and medication \
         counts, the most frequent symptoms, and the raw entries."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn execute(&self, _arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let response = self.journal.get_health_summary();

        Ok(ToolResult {
            call_id: String::new(),
            success: true,
            output: response.summary().to_string(),
            data: Some(to_data(self.name(), &response)?),
        })
    }
}
