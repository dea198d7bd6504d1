use crate::core::ShortageThresholds;
use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub dataset: DatasetSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetSettings {
    #[serde(default = "default_dataset_path")]
    pub path: String,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
        }
    }
}

fn default_dataset_path() -> String { "data/mock_data.json".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// Donors listed per recipient in the dashboard report
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default = "default_critical_threshold")]
    pub critical_threshold: u32,
    #[serde(default = "default_shortage_threshold")]
    pub shortage_threshold: u32,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            critical_threshold: default_critical_threshold(),
            shortage_threshold: default_shortage_threshold(),
        }
    }
}

impl MatchingSettings {
    pub fn thresholds(&self) -> ShortageThresholds {
        ShortageThresholds {
            critical: self.critical_threshold,
            shortage: self.shortage_threshold,
        }
    }
}

fn default_top_n() -> usize { 3 }
fn default_critical_threshold() -> u32 { 2 }
fn default_shortage_threshold() -> u32 { 3 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with DONOR__)
    pub fn load() -> Result<Self, ConfigError> {
        let config = builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., DONOR__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        Self::from_config(config)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config = builder()?
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        Self::from_config(config)
    }

    fn from_config(config: Config) -> Result<Self, ConfigError> {
        let settings: Self = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values that deserialize but cannot be served
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.matching.top_n == 0 {
            return Err(ConfigError::Message(
                "matching.top_n must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder with the defaults every source is layered over
fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 8080)
}

fn environment() -> Environment {
    Environment::with_prefix("DONOR")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
