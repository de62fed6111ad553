//! Configuration loading, validation, and management for CareerFit.
//!
//! Loads configuration from `~/.careerfit/config.toml` with environment
//! variable overrides. Validates all settings at startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// The root configuration structure.
///
/// Maps directly to `~/.careerfit/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Scoring pipeline settings
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Reference catalog source
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Session state machine settings
    #[serde(default)]
    pub session: SessionConfig,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// What the trait aggregator does when a trait has no answers at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyGroupPolicy {
    /// Fail the aggregation
    #[default]
    Reject,
    /// Score the trait as 0
    Zero,
}

impl FromStr for EmptyGroupPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "zero" => Ok(Self::Zero),
            other => Err(format!("unknown empty group policy: {other} (expected reject or zero)")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Artificial wait before a submitted assessment resolves (0 = none)
    #[serde(default)]
    pub processing_delay_ms: u64,

    #[serde(default)]
    pub empty_group_policy: EmptyGroupPolicy,

    /// How many careers `recommend` returns by default
    #[serde(default = "default_recommendation_limit")]
    pub recommendation_limit: usize,
}

fn default_recommendation_limit() -> usize {
    5
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            processing_delay_ms: 0,
            empty_group_policy: EmptyGroupPolicy::default(),
            recommendation_limit: default_recommendation_limit(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Load the catalog from this TOML file instead of the built-in one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Publish screen changes and results on the event bus
    #[serde(default = "default_true")]
    pub publish_events: bool,

    #[serde(default = "default_event_capacity")]
    pub event_capacity: usize,
}

fn default_true() -> bool {
    true
}
fn default_event_capacity() -> usize {
    64
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            publish_events: true,
            event_capacity: default_event_capacity(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "warn".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Longest artificial delay we accept.
const MAX_PROCESSING_DELAY_MS: u64 = 60_000;

impl AppConfig {
    /// Load configuration from the default path (~/.careerfit/config.toml).
    ///
    /// Environment variables take priority over the file:
    /// - `CAREERFIT_CATALOG`
    /// - `CAREERFIT_PROCESSING_DELAY_MS`
    /// - `CAREERFIT_EMPTY_GROUP_POLICY`
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
    /// production, a map in tests).
    pub fn apply_env_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(path) = lookup("CAREERFIT_CATALOG") {
            self.catalog.path = Some(path);
        }

        if let Some(delay) = lookup("CAREERFIT_PROCESSING_DELAY_MS") {
            self.scoring.processing_delay_ms = delay.trim().parse().map_err(|_| {
                ConfigError::ValidationError(format!(
                    "CAREERFIT_PROCESSING_DELAY_MS must be a number of milliseconds, got '{delay}'"
                ))
            })?;
        }

        if let Some(policy) = lookup("CAREERFIT_EMPTY_GROUP_POLICY") {
            self.scoring.empty_group_policy =
                policy.parse().map_err(ConfigError::ValidationError)?;
        }

        Ok(())
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".careerfit")
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scoring.recommendation_limit == 0 {
            return Err(ConfigError::ValidationError(
                "scoring.recommendation_limit must be at least 1".into(),
            ));
        }

        if self.scoring.processing_delay_ms > MAX_PROCESSING_DELAY_MS {
            return Err(ConfigError::ValidationError(format!(
                "scoring.processing_delay_ms must be at most {MAX_PROCESSING_DELAY_MS}"
            )));
        }

        if self.session.event_capacity == 0 {
            return Err(ConfigError::ValidationError(
                "session.event_capacity must be > 0".into(),
            ));
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "logging.level must be one of {}",
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    /// Generate a default config TOML string (for `onboard` command).
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
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
