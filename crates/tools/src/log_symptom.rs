//! `log_symptom` tool — records a symptom with a 1–10 severity.

use async_trait::async_trait;
use healthjournal_core::error::ToolError;
use healthjournal_core::tool::{Tool, ToolResult};
use std::sync::Arc;

use crate::args::{optional_str, required_int, required_str};
use crate::journal::HealthJournal;
use crate::to_data;

pub struct LogSymptomTool {
    journal: Arc<HealthJournal>,
}

impl LogSymptomTool {
    pub fn new(journal: Arc<HealthJournal>) -> Self {
        Self { journal }
    }
}

#[async_trait]
impl Tool for LogSymptomTool {
    fn name(&self) -> &str {
        "log_symptom"
    }

    fn description(&self) -> &str {
        "Log a symptom with a severity rating from 1 (mild) to 10 (worst imaginable). \
         Check the 'status' field of the result: 'error' means nothing was recorded."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "symptom_name": {
                    "type": "string",
                    "description": "The symptom, e.g. 'headache'"
                },
                "severity": {
                    "type": "integer",
                    "minimum": 1,
                    "maximum": 10,
                    "description": "Severity on a 1-10 scale"
                },
                "notes": {
                    "type": "string",
                    "description": "Optional extra notes",
                    "default": ""
                }
            },
            "required": ["symptom_name", "severity"]
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let symptom_name = required_str(&arguments, "symptom_name")?;
        let severity = required_int(&arguments, "severity")?;
        let notes = optional_str(&arguments, "notes")?;

        let response = self.journal.log_symptom(symptom_name, severity, notes);

        Ok(ToolResult {
            call_id: String::new(),
            success: response.is_success(),
            output: response.text().to_string(),
            data: Some(to_data(self.name(), &response)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::journal;

    #[tokio::test]
    async fn logs_valid_symptom() {
        let journal = journal();
        let tool = LogSymptomTool::new(journal.clone());
        let result = tool
            .execute(serde_json::json!({
                "symptom_name": "headache",
                "severity": 7,
                "notes": "throbbing pain"
            }))
            .await
            .unwrap();

        assert!(result.success);
        assert_eq!(result.output, "Logged headache (severity 7)");
        assert_eq!(result.data.unwrap()["status"], "success");
        assert_eq!(journal.store().symptom_count(), 1);
    }

    #[tokio::test]
    async fn out_of_range_is_a_status_not_an_error() {
        let journal = journal();
        let tool = LogSymptomTool::new(journal.clone());
        let result = tool
            .execute(serde_json::json!({"symptom_name": "headache", "severity": 0}))
            .await
            .unwrap();

        assert!(!result.success);
        let data = result.data.unwrap();
        assert_eq!(data["status"], "error");
        assert_eq!(data["error_message"], "Severity must be between 1 and 10");
        assert_eq!(journal.store().symptom_count(), 0);
    }

    #[tokio::test]
    async fn severity_beyond_i64_is_out_of_range() {
        let journal = journal();
        let tool = LogSymptomTool::new(journal.clone());
        let arguments: serde_json::Value =
            serde_json::from_str(r#"{"symptom_name": "headache", "severity": 18446744073709551615}"#)
                .unwrap();
        let result = tool.execute(arguments).await.unwrap();

        assert!(!result.success);
        let data = result.data.unwrap();
        assert_eq!(data["status"], "error");
        assert_eq!(data["error_message"], "Severity must be between 1 and 10");
        assert_eq!(journal.store().symptom_count(), 0);
    }

    #[tokio::test]
    async fn non_numeric_severity_is_a_type_error() {
        let tool = LogSymptomTool::new(journal());
        let err = tool
            .execute(serde_json::json!({"symptom_name": "headache", "severity": "bad"}))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[tokio::test]
    async fn missing_name_is_a_type_error() {
        let tool = LogSymptomTool::new(journal());
        let result = tool.execute(serde_json::json!({"severity": 3})).await;
        assert!(result.is_err());
    }

    #[test]
    fn tool_definition() {
        let tool = LogSymptomTool::new(journal());
        let def = tool.to_definition();
        assert_eq!(def.name, "log_symptom");
        assert_eq!(def.parameters["required"][1], "severity");
    }
}
