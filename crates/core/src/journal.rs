//! JournalStore trait — append-only storage for symptom and medication
//! entries.
//!
//! Implementations must:
//! - never reorder, update, or delete entries (insertion order is the only
//!   ordering key);
//! - return owned snapshots from the `get_*` reads, so callers cannot
//!   mutate stored state through them;
//! - serialize appends and snapshot copies so a read never observes a
//!   partial append.
//!
//! Implementations: `InMemoryJournal` (in `healthjournal-store`).

use crate::entry::{MedicationEntry, SymptomEntry};

/// Default window for "recent history" reads.
pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// Window used by pattern analysis and summaries to approximate "all".
pub const ANALYSIS_WINDOW: usize = 100;

/// The core JournalStore trait.
pub trait JournalStore: Send + Sync {
    /// The store name (e.g., "in_memory").
    fn name(&self) -> &str;

    /// Append a symptom entry. Validation is the caller's job.
    fn add_symptom(&self, entry: SymptomEntry);

    /// Append a medication entry.
    fn add_medication(&self, entry: MedicationEntry);

    /// The last `limit` symptom entries, oldest of the window first.
    fn get_symptoms(&self, limit: usize) -> Vec<SymptomEntry>;

    /// The last `limit` medication entries, oldest of the window first.
    fn get_medications(&self, limit: usize) -> Vec<MedicationEntry>;

    /// Total symptom entries ever stored.
    fn symptom_count(&self) -> usize;

    /// Total medication entries ever stored.
    fn medication_count(&self) -> usize;
}
