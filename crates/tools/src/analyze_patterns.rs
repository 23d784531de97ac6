//! `analyze_patterns` tool — symptom frequency and average severity.

use async_trait::async_trait;
use healthjournal_core::error::ToolError;
use healthjournal_core::tool::{Tool, ToolResult};
use std::sync::Arc;

use crate::analysis::format_pattern;
use crate::journal::HealthJournal;
use crate::response::AnalyzePatternsResponse;
use crate::to_data;

pub struct AnalyzePatternsTool {
    journal: Arc<HealthJournal>,
}

impl AnalyzePatternsTool {
    pub fn new(journal: Arc<HealthJournal>) -> Self {
        Self { journal }
    }
}

#[async_trait]
impl Tool for AnalyzePatternsTool {
    fn name(&self) -> &str {
        "analyze_patterns"
    }

    fn description(&self) -> &str {
        "Analyze logged symptoms: how often each occurred and its average severity, \
         most frequent first. Returns status 'no_data' when nothing is logged."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn execute(&self, _arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let response = self.journal.analyze_patterns();

        let output = match &response {
            AnalyzePatternsResponse::Success { patterns, total_entries } => {
                let mut lines = vec![format!("{total_entries} entries analyzed")];
                lines.extend(patterns.iter().map(format_pattern));
                lines.join("\n")
            }
            AnalyzePatternsResponse::NoData { message } => message.clone(),
        };

        Ok(ToolResult {
            call_id: String::new(),
            success: true,
            output,
            data: Some(to_data(self.name(), &response)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::journal;

    #[tokio::test]
    async fn no_data_on_empty_journal() {
        let tool = AnalyzePatternsTool::new(journal());
        let result = tool.execute(serde_json::Value::Null).await.unwrap();
        assert_eq!(result.output, "No symptoms logged yet");
        assert_eq!(result.data.unwrap()["status"], "no_data");
    }

    #[tokio::test]
    async fn reports_patterns() {
        let journal = journal();
        journal.log_symptom("headache", 7, "");
        journal.log_symptom("headache", 9, "");
        journal.log_symptom("nausea", 4, "");

        let tool = AnalyzePatternsTool::new(journal);
        let result = tool.execute(serde_json::json!({})).await.unwrap();

        assert!(result.output.contains("headache: 2x (avg severity 8.0)"));
        let data = result.data.unwrap();
        assert_eq!(data["total_entries"], 3);
        assert_eq!(data["patterns"][0]["symptom"], "headache");
        assert_eq!(data["patterns"][1]["symptom"], "nausea");
    }
}
