//! Configuration management.
//!
//! Supports loading configuration from:
//! 1. A YAML file (default `~/.bloch/config.yaml`)
//! 2. Environment variables (with BLOCH_ prefix)
//!
//! Configuration precedence (highest to lowest):
//! 1. Environment variables
//! 2. Configuration file
//! 3. Default values

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::tracker::DEFAULT_CAPACITY;

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Gate sequence settings
    #[serde(default)]
    pub session: SessionConfig,

    /// Visualizer hand-off settings
    #[serde(default)]
    pub visualizer: VisualizerConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Gate sequence settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Logical tokens accepted before input locks
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

/// Visualizer hand-off settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizerConfig {
    /// Most operations the renderer can show in one transition
    #[serde(default = "default_max_gates")]
    pub max_gates: usize,

    /// File receiving the QASM program; stdout when unset
    #[serde(default)]
    pub output: Option<PathBuf>,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level used when no -v flag is given
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

fn default_max_gates() -> usize {
    10
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            max_gates: default_max_gates(),
            output: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(format!("{}: {e}", path.as_ref().display())))?;

        let config: Config = serde_yaml_ng::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with the following precedence:
    /// 1. Load from `config_file`, or the default path if that file exists
    /// 2. Apply environment variable overrides
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => match default_path() {
                Some(path) if path.exists() => Self::from_file(path)?,
                _ => Config::default(),
            },
        };

        let config = config.merge_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Merge environment variables into this configuration.
    ///
    /// Only variables present in the environment override values. The lookup
    /// is injected so tests need not touch the process environment.
    pub fn merge_env(
        mut self,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(v) = var("BLOCH_CAPACITY") {
            self.session.capacity = parse_var("BLOCH_CAPACITY", &v)?;
        }
        if let Some(v) = var("BLOCH_MAX_GATES") {
            self.visualizer.max_gates = parse_var("BLOCH_MAX_GATES", &v)?;
        }
        if let Some(v) = var("BLOCH_OUTPUT") {
            self.visualizer.output = Some(PathBuf::from(v));
        }
        if let Some(v) = var("BLOCH_LOG_LEVEL") {
            self.logging.level = v;
        }
        Ok(self)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session.capacity == 0 {
            return Err(ConfigError::ValidationError(
                "session.capacity must be greater than 0".to_string(),
            ));
        }

        if self.visualizer.max_gates == 0 {
            return Err(ConfigError::ValidationError(
                "visualizer.max_gates must be greater than 0".to_string(),
            ));
        }

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log level: {other}"
                )));
            }
        }

        Ok(())
    }
}

/// Default configuration file location (`~/.bloch/config.yaml`).
pub fn default_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".bloch").join("config.yaml"))
}

fn parse_var(key: &str, value: &str) -> Result<usize, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::ParseError(format!("{key}={value} is not a number")))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}
