//! Tracing subscriber setup for the CLI.

use tracing_subscriber::EnvFilter;

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    /// Parse the `[logging] format` config value; anything unknown is text.
    pub fn from_config(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Pick the filter directive: `RUST_LOG` wins, then `--verbose`, then config.
pub fn filter(verbose: bool, configured_level: &str) -> EnvFilter {
    let fallback = if verbose { "debug" } else { configured_level };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install the global subscriber. Logs always go to stderr so that
/// `session` output on stdout stays one JSON document per line.
pub fn init(verbose: bool, configured_level: &str, format: LogFormat) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose, configured_level))
        .with_writer(std::io::stderr)
        .with_target(false);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
