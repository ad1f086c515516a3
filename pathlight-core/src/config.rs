//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/pathlight/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/pathlight/` (~/.config/pathlight/)
//! - State/Logs: `$XDG_STATE_HOME/pathlight/` (~/.local/state/pathlight/)
//!
//! A missing config file yields the defaults; a malformed one is a
//! configuration error.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Synthetic metrics configuration
    #[serde(default)]
    pub metrics: MetricsConfig,

    /// Deferred-analysis configuration
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Synthetic metrics series configuration
#[derive(Debug, Deserialize)]
pub struct MetricsConfig {
    /// Number of samples kept in the trend window
    #[serde(default = "default_window_size")]
    pub window_size: usize,

    /// Jitter span in points applied to each derived score
    #[serde(default = "default_jitter")]
    pub jitter: f64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            window_size: default_window_size(),
            jitter: default_jitter(),
        }
    }
}

fn default_window_size() -> usize {
    14
}

fn default_jitter() -> f64 {
    5.0
}

/// Deferred-analysis configuration
#[derive(Debug, Deserialize)]
pub struct AnalysisConfig {
    /// Simulated analysis delay before a classification lands, in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
        }
    }
}

fn default_delay_ms() -> u64 {
    1200
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Returns the config directory path
    pub fn config_dir() -> PathBuf {
        xdg_config_home().join("pathlight")
    }

    /// Returns the config file path
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Returns the state directory (logs)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("pathlight")
    }

    /// Returns the log file path
    pub fn log_path() -> PathBuf {
        Self::state_dir().join("pathlight.log")
    }

    /// Load configuration from the default location.
    ///
    /// Returns defaults if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))
    }
}
