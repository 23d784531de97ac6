//! Error types for the healthjournal domain.
//!
//! Uses `thiserror`; each bounded context has its own error enum.

use thiserror::Error;

/// Validation failures raised while ingesting journal entries.
///
/// These never abort an operation; the tools layer turns them into a
/// `status: "error"` payload for the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JournalError {
    #[error("Severity must be between 1 and 10")]
    SeverityOutOfRange { severity: i64 },
}

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("Tool execution failed: {tool_name} — {reason}")]
    ExecutionFailed { tool_name: String, reason: String },

    #[error("Invalid tool arguments: {0}")]
    InvalidArguments(String),
}
