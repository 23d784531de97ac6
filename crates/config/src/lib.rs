//! Configuration loading, validation, and management for healthjournal.
//!
//! Loads configuration from `~/.healthjournal/config.toml` with environment
//! variable overrides. Validates all settings at startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.healthjournal/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Journal read windows and summary sizing
    #[serde(default)]
    pub journal: JournalConfig,

    /// Gateway configuration
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalConfig {
    /// Default number of entries returned by recent-history reads
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,

    /// Number of recent entries pattern analysis and summaries look at
    #[serde(default = "default_analysis_window")]
    pub analysis_window: usize,

    /// How many patterns the summary lists under "Top symptoms"
    #[serde(default = "default_top_symptoms")]
    pub top_symptoms: usize,
}

fn default_recent_limit() -> usize {
    10
}
fn default_analysis_window() -> usize {
    100
}
fn default_top_symptoms() -> usize {
    3
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            recent_limit: default_recent_limit(),
            analysis_window: default_analysis_window(),
            top_symptoms: default_top_symptoms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default)]
    pub allow_public_bind: bool,

    /// Origins allowed by CORS. Empty = same-origin only.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_port() -> u16 {
    42618
}
fn default_host() -> String {
    "127.0.0.1".into()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            allow_public_bind: false,
            cors_origins: vec![],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// "text" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".into()
}
fn default_log_format() -> String {
    "text".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path (~/.healthjournal/config.toml).
    ///
    /// Environment variables override the file:
    /// - `HEALTHJOURNAL_HOST`
    /// - `HEALTHJOURNAL_PORT`
    /// - `HEALTHJOURNAL_LOG_FORMAT`
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        let mut config = Self::load_from(&config_path)?;
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup (the process environment in
    /// [`AppConfig::load`]).
    fn apply_env_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(host) = lookup("HEALTHJOURNAL_HOST") {
            self.gateway.host = host;
        }

        if let Some(port) = lookup("HEALTHJOURNAL_PORT") {
            self.gateway.port = port.parse().map_err(|_| {
                ConfigError::ValidationError(format!("HEALTHJOURNAL_PORT is not a port: {port}"))
            })?;
        }

        if let Some(format) = lookup("HEALTHJOURNAL_LOG_FORMAT") {
            self.logging.format = format;
        }

        Ok(())
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".healthjournal")
    }

    /// Get the configuration file path.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.journal.recent_limit == 0 {
            return Err(ConfigError::ValidationError(
                "journal.recent_limit must be > 0".into(),
            ));
        }

        if self.journal.analysis_window == 0 {
            return Err(ConfigError::ValidationError(
                "journal.analysis_window must be > 0".into(),
            ));
        }

        if self.journal.top_symptoms == 0 {
            return Err(ConfigError::ValidationError(
                "journal.top_symptoms must be > 0".into(),
            ));
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            return Err(ConfigError::ValidationError(format!(
                "logging.format must be \"text\" or \"json\", got \"{}\"",
                self.logging.format
            )));
        }

        if self.gateway.host == "0.0.0.0" && !self.gateway.allow_public_bind {
            return Err(ConfigError::ValidationError(
                "gateway.host 0.0.0.0 requires gateway.allow_public_bind = true".into(),
            ));
        }

        Ok(())
    }

}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert_eq!(config.journal.recent_limit, 10);
        assert_eq!(config.journal.analysis_window, 100);
        assert_eq!(config.journal.top_symptoms, 3);
        assert_eq!(config.gateway.port, 42618);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_roundtrip_toml() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.gateway.port, config.gateway.port);
        assert_eq!(parsed.journal.analysis_window, config.journal.analysis_window);
    }

    #[test]
    fn zero_window_rejected() {
        let config = AppConfig {
            journal: JournalConfig {
                analysis_window: 0,
                ..JournalConfig::default()
            },
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_top_symptoms_rejected() {
        let config = AppConfig {
            journal: JournalConfig {
                top_symptoms: 0,
                ..JournalConfig::default()
            },
            ..AppConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("top_symptoms"));
    }

    #[test]
    fn zero_top_symptoms_in_file_is_rejected_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[journal]\ntop_symptoms = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load_from(&path),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn unknown_log_format_rejected() {
        let mut config = AppConfig::default();
        config.logging.format = "yaml".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn public_bind_requires_opt_in() {
        let mut config = AppConfig::default();
        config.gateway.host = "0.0.0.0".into();
        assert!(config.validate().is_err());

        config.gateway.allow_public_bind = true;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_config_file_returns_defaults() {
        let result = AppConfig::load_from(Path::new("/nonexistent/config.toml"));
        assert!(result.is_ok());
        assert_eq!(result.unwrap().journal.recent_limit, 10);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[journal]\nanalysis_window = 50\n\n[gateway]\nport = 9000").unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.journal.analysis_window, 50);
        assert_eq!(config.journal.recent_limit, 10);
        assert_eq!(config.gateway.port, 9000);
        assert_eq!(config.gateway.host, "127.0.0.1");
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[journal\nrecent_limit = ").unwrap();

        let err = AppConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn env_overrides_apply() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("HEALTHJOURNAL_HOST", "localhost"),
            ("HEALTHJOURNAL_PORT", "8088"),
            ("HEALTHJOURNAL_LOG_FORMAT", "json"),
        ]);
        let mut config = AppConfig::default();
        config
            .apply_env_overrides(|k| vars.get(k).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.gateway.host, "localhost");
        assert_eq!(config.gateway.port, 8088);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn bad_port_override_rejected() {
        let mut config = AppConfig::default();
        let result = config.apply_env_overrides(|k| {
            (k == "HEALTHJOURNAL_PORT").then(|| "not-a-port".to_string())
        });
        assert!(result.is_err());
    }
}
