//! Configuration management for the converter.
//!
//! Defaults for the CLI options can be kept in a TOML file so repeated runs
//! do not need every flag. Precedence is: explicit flag, then config file,
//! then the built-in defaults from [`crate::constants`].

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{
    APP_NAME, CONFIG_DIR_ENV, DEFAULT_NEAREST_THRESHOLD, DEFAULT_SEMANTIC_CLASS,
    DEFAULT_THEME_NAME,
};
use crate::error::ConvertError;

/// Conversion defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// `name` written into the output theme
    pub name: String,
    /// `semanticClass` written into the output theme
    pub semantic_class: String,
    /// Maximum RGB distance for a nearest-match remap
    pub nearest_threshold: f64,
    /// Print every nearest/unchanged remap
    pub log_non_exact: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_THEME_NAME.to_string(),
            semantic_class: DEFAULT_SEMANTIC_CLASS.to_string(),
            nearest_threshold: DEFAULT_NEAREST_THRESHOLD,
            log_non_exact: false,
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - `$TWOLIGHT_CONFIG_DIR/config.toml` when the variable is set
/// - Linux: `~/.config/TwoLight/config.toml`
/// - macOS: `~/Library/Application Support/TwoLight/config.toml`
/// - Windows: `%APPDATA%\TwoLight\config.toml`
///
/// # Example
///
/// ```toml
/// [convert]
/// name = "TwoLight"
/// nearest_threshold = 40.0
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Conversion defaults
    pub convert: ConvertConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// `TWOLIGHT_CONFIG_DIR` wins over the platform config directory.
    /// Returns `None` when neither is available (e.g. no home directory).
    pub fn config_dir() -> Option<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Some(PathBuf::from(dir));
        }

        dirs::config_dir().map(|dir| dir.join(APP_NAME))
    }

    /// Gets the full path to the default config file.
    pub fn config_file_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Loads configuration from the default location.
    ///
    /// If there is no config directory or the file doesn't exist, returns
    /// default configuration.
    pub fn load() -> Result<Self> {
        Self::load_optional(Self::config_file_path().as_deref())
    }

    /// Loads `path` if it names an existing file, else returns defaults.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if path.exists() => Self::load_from(path),
            _ => Ok(Self::new()),
        }
    }

    /// Loads configuration from an explicit file, which must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validates configuration values.
    ///
    /// Checks that the nearest threshold is finite and non-negative.
    pub fn validate(&self) -> Result<(), ConvertError> {
        validate_threshold(self.convert.nearest_threshold)
    }
}

/// Rejects negative, infinite, and NaN thresholds.
pub fn validate_threshold(threshold: f64) -> Result<(), ConvertError> {
    if threshold.is_finite() && threshold >= 0.0 {
        Ok(())
    } else {
        Err(ConvertError::InvalidThreshold(threshold))
    }
}
