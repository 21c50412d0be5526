use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::{Thresholds, DEFAULT_BLOCK_THRESHOLD, DEFAULT_WARN_THRESHOLD};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub detection: DetectionSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct DetectionSettings {
    #[serde(default = "default_block_threshold")]
    pub block_threshold: f64,
    #[serde(default = "default_warn_threshold")]
    pub warn_threshold: f64,
    /// Applied when a request does not say whether it is strict
    #[serde(default)]
    pub strict_by_default: bool,
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,
}

impl Default for DetectionSettings {
    fn default() -> Self {
        Self {
            block_threshold: default_block_threshold(),
            warn_threshold: default_warn_threshold(),
            strict_by_default: false,
            max_candidates: default_max_candidates(),
        }
    }
}

impl DetectionSettings {
    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            block: self.block_threshold,
            warn: self.warn_threshold,
        }
    }
}

fn default_block_threshold() -> f64 { DEFAULT_BLOCK_THRESHOLD }
fn default_warn_threshold() -> f64 { DEFAULT_WARN_THRESHOLD }
fn default_max_candidates() -> usize { 100 }

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
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with DEDUP__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., DEDUP__DETECTION__BLOCK_THRESHOLD -> detection.block_threshold
            .add_source(env_source())
            .build()?;

        settings.try_deserialize::<Settings>()?.validated()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        settings.try_deserialize::<Settings>()?.validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        let thresholds = self.detection.thresholds();
        if !thresholds.is_valid() {
            return Err(ConfigError::Message(format!(
                "detection thresholds must satisfy 0 < warn < block <= 1 (block={}, warn={})",
                thresholds.block, thresholds.warn
            )));
        }
        if self.detection.max_candidates == 0 {
            return Err(ConfigError::Message(
                "detection.max_candidates must be at least 1".to_string(),
            ));
        }
        Ok(self)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("DEDUP")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
