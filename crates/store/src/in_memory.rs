//! In-memory journal — entries live for the lifetime of the process.

use healthjournal_core::entry::{MedicationEntry, SymptomEntry};
use healthjournal_core::journal::JournalStore;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info};

#[derive(Default)]
struct Entries {
    symptoms: Vec<SymptomEntry>,
    medications: Vec<MedicationEntry>,
}

/// An append-only journal held in two `Vec`s behind a single lock.
///
/// The one lock guards both sequences and is held only for a push or a
/// snapshot copy.
pub struct InMemoryJournal {
    entries: Mutex<Entries>,
}

impl InMemoryJournal {
    pub fn new() -> Self {
        info!("In-memory journal initialized");
        Self {
            entries: Mutex::new(Entries::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Entries> {
        // Appends are a single push, so a poisoned lock still guards
        // consistent data.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for InMemoryJournal {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InMemoryJournal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries = self.lock();
        f.debug_struct("InMemoryJournal")
            .field("symptoms", &entries.symptoms.len())
            .field("medications", &entries.medications.len())
            .finish()
    }
}

/// Clone the last `limit` items, oldest first.
fn tail<T: Clone>(items: &[T], limit: usize) -> Vec<T> {
    let start = items.len().saturating_sub(limit);
    items[start..].to_vec()
}

impl JournalStore for InMemoryJournal {
    fn name(&self) -> &str {
        "in_memory"
    }

    fn add_symptom(&self, entry: SymptomEntry) {
        info!(symptom = %entry.symptom, severity = entry.severity, "Symptom added");
        self.lock().symptoms.push(entry);
    }

    fn add_medication(&self, entry: MedicationEntry) {
        info!(medication = %entry.medication, dosage = %entry.dosage, "Medication tracked");
        self.lock().medications.push(entry);
    }

    fn get_symptoms(&self, limit: usize) -> Vec<SymptomEntry> {
        let results = tail(&self.lock().symptoms, limit);
        debug!(count = results.len(), limit, "Retrieved symptoms");
        results
    }

    fn get_medications(&self, limit: usize) -> Vec<MedicationEntry> {
        let results = tail(&self.lock().medications, limit);
        debug!(count = results.len(), limit, "Retrieved medications");
        results
    }

    fn symptom_count(&self) -> usize {
        self.lock().symptoms.len()
    }

    fn medication_count(&self) -> usize {
        self.lock().medications.len()
    }
}
