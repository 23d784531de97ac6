//! `healthjournal session` — JSON-lines tool calls over stdin/stdout.

use std::sync::Arc;

use healthjournal_config::AppConfig;
use healthjournal_core::clock::SystemClock;
use healthjournal_store::InMemoryJournal;
use healthjournal_tools::{HealthJournal, JournalSettings, journal_registry};
use tokio::io::{self, BufReader};
use tracing::info;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    let journal = Arc::new(
        HealthJournal::new(Arc::new(InMemoryJournal::new()), Arc::new(SystemClock))
            .with_settings(JournalSettings::from(&config.journal)),
    );
    let registry = journal_registry(journal);

    info!(tools = registry.len(), "Session started");
    let handled =
        healthjournal_cli::session::run_session(&registry, BufReader::new(io::stdin()), io::stdout())
            .await?;
    info!(calls = handled, "Session finished");

    Ok(())
}
