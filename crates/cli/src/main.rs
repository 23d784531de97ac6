//! healthjournal CLI — the main entry point.
//!
//! Commands:
//! - `serve`    — Start the HTTP gateway
//! - `session`  — JSON-lines tool calls over stdin/stdout
//! - `tools`    — Print the tool definitions
//! - `config`   — Show, locate or validate the configuration

use clap::{Parser, Subcommand};
use healthjournal_cli::logging::{self, LogFormat};
use healthjournal_config::AppConfig;

mod commands;

#[derive(Parser)]
#[command(
    name = "healthjournal",
    about = "healthjournal — symptom and medication journal with pattern analysis",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log output format (defaults to the `[logging] format` config value)
    #[arg(long, value_enum, global = true)]
    log_format: Option<LogFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP gateway server
    Serve {
        /// Override the port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Read tool calls as JSON lines from stdin and answer on stdout
    Session,

    /// Print the tool definitions as JSON
    Tools,

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Check the configuration for errors
    Validate,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // A broken config file must not stop `config validate` from reporting it.
    let logging_config = AppConfig::load().map(|c| c.logging).unwrap_or_default();
    let format = cli
        .log_format
        .unwrap_or_else(|| LogFormat::from_config(&logging_config.format));
    logging::init(cli.verbose, &logging_config.level, format);

    match cli.command {
        Commands::Serve { port } => commands::serve::run(port).await?,
        Commands::Session => commands::session::run().await?,
        Commands::Tools => commands::tools::run().await?,
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config_cmd::show().await?,
            ConfigAction::Path => commands::config_cmd::path().await?,
            ConfigAction::Validate => commands::config_cmd::validate().await?,
        },
    }

    Ok(())
}
