//! `healthjournal serve` — Start the HTTP API server.

use healthjournal_config::AppConfig;

pub async fn run(port_override: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    if let Some(port) = port_override {
        config.gateway.port = port;
    }

    eprintln!("healthjournal gateway");
    eprintln!("   Listening: {}:{}", config.gateway.host, config.gateway.port);
    eprintln!("   Analysis window: {}", config.journal.analysis_window);

    healthjournal_gateway::start(config).await?;

    Ok(())
}
