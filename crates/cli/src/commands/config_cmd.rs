//! `healthjournal config` — Configuration management commands.

use healthjournal_config::AppConfig;

pub async fn validate() -> Result<(), Box<dyn std::error::Error>> {
    println!("Validating {}", AppConfig::config_path().display());

    match AppConfig::load() {
        Ok(config) => {
            println!("   ✅ Config is valid");

            if !AppConfig::config_path().exists() {
                println!("   ⚠️  No config file found, using defaults");
            }

            println!();
            println!(
                "   Gateway:   {}:{}",
                config.gateway.host, config.gateway.port
            );
            println!("   Recent:    {} entries", config.journal.recent_limit);
            println!("   Window:    {} entries", config.journal.analysis_window);
            println!("   Top:       {} symptoms", config.journal.top_symptoms);
            println!(
                "   Logging:   {} ({})",
                config.logging.level, config.logging.format
            );
        }
        Err(e) => {
            println!("   ❌ Config error: {e}");
            return Err(e.into());
        }
    }

    Ok(())
}

pub async fn show() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

pub async fn path() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", AppConfig::config_path().display());
    Ok(())
}
