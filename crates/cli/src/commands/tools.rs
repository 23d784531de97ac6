//! `healthjournal tools` — Print the tool definitions.

use std::sync::Arc;

use healthjournal_core::clock::SystemClock;
use healthjournal_store::InMemoryJournal;
use healthjournal_tools::{HealthJournal, journal_registry};

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let journal = Arc::new(HealthJournal::new(
        Arc::new(InMemoryJournal::new()),
        Arc::new(SystemClock),
    ));
    let registry = journal_registry(journal);

    println!("{}", serde_json::to_string_pretty(&registry.definitions())?);
    Ok(())
}
