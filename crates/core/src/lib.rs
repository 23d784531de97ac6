//! # healthjournal core
//!
//! Domain types, traits, and error definitions for the healthjournal
//! symptom and medication tracker. This crate has **no framework
//! dependencies** — it defines the domain model that the store, tools,
//! and gateway crates implement against.
//!
//! ## Layout
//!
//! - [`entry`] — the immutable records (symptoms, medications) and the
//!   derived [`PatternResult`].
//! - [`journal`] — the [`JournalStore`] trait every store implements.
//! - [`clock`] — injectable time source.
//! - [`tool`] — the [`Tool`] trait and [`ToolRegistry`] an orchestrator
//!   calls into.

pub mod clock;
pub mod entry;
pub mod error;
pub mod journal;
pub mod tool;

// Re-export key types at crate root for ergonomics
pub use clock::{Clock, FixedClock, SystemClock};
pub use entry::{MedicationEntry, PatternResult, SymptomEntry};
pub use error::{JournalError, ToolError};
pub use journal::{ANALYSIS_WINDOW, DEFAULT_RECENT_LIMIT, JournalStore};
pub use tool::{Tool, ToolCall, ToolDefinition, ToolRegistry, ToolResult};
