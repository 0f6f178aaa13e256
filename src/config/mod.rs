//! Configuration system for the buoy i18n tool.
//!
//! The configuration follows XDG Base Directory Specification and supports:
//! - User config: `~/.config/buoy-i18n/config.yaml`
//! - Project config: `.buoy-i18n.yaml` in current directory
//! - Environment variables: `BUOY_LOCALE`, `BUOY_HOST_LOCALE`
//! - Command-line flags (highest precedence)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::i18n::HOST_LOCALE_ENV;

/// Environment variable forcing an explicit locale.
pub const LOCALE_ENV: &str = "BUOY_LOCALE";

/// Main configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Explicit locale code; skips resolution when set.
    #[serde(default)]
    pub locale: Option<String>,

    /// Locale hint standing in for the host application's.
    #[serde(default)]
    pub host_locale: Option<String>,

    /// Output configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output format used when neither a flag nor a config file sets one.
pub const DEFAULT_FORMAT: &str = "table";

/// Color mode used when neither a flag nor a config file sets one.
pub const DEFAULT_COLOR: &str = "auto";

/// Output formatting configuration.
///
/// Unset fields stay `None` so a later layer can override an earlier one
/// with any value, defaults included.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Default output format (table, json, yaml, jsonl).
    #[serde(default)]
    pub format: Option<String>,

    /// Color output mode (auto, always, never).
    #[serde(default)]
    pub color: Option<String>,
}

impl Config {
    /// Load configuration from all sources with proper precedence.
    ///
    /// Resolution order (highest to lowest):
    /// 1. CLI flags (handled separately)
    /// 2. Environment variables
    /// 3. Project config (`.buoy-i18n.yaml`)
    /// 4. User config (`~/.config/buoy-i18n/config.yaml`)
    /// 5. Defaults
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = Self::user_config_path()
            && path.exists()
        {
            tracing::debug!(path = %path.display(), "Loading user config");
            config.merge(Self::load_from_file(&path)?);
        }

        let project_path = PathBuf::from(".buoy-i18n.yaml");
        if project_path.exists() {
            tracing::debug!(path = %project_path.display(), "Loading project config");
            config.merge(Self::load_from_file(&project_path)?);
        }

        config.apply_env_overrides(|name| std::env::var(name).ok());

        Ok(config)
    }

    /// Load configuration from a YAML file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            Error::config(format!("Failed to parse config file {}: {}", path.display(), e))
        })
    }

    /// Merge another config into this one (other takes precedence).
    fn merge(&mut self, other: Self) {
        if other.locale.is_some() {
            self.locale = other.locale;
        }

        if other.host_locale.is_some() {
            self.host_locale = other.host_locale;
        }

        if other.output.format.is_some() {
            self.output.format = other.output.format;
        }

        if other.output.color.is_some() {
            self.output.color = other.output.color;
        }
    }

    /// Apply environment variable overrides. Empty values are ignored.
    fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(locale) = lookup(LOCALE_ENV).filter(|v| !v.trim().is_empty()) {
            self.locale = Some(locale);
        }

        if let Some(hint) = lookup(HOST_LOCALE_ENV).filter(|v| !v.trim().is_empty()) {
            self.host_locale = Some(hint);
        }
    }

    /// Get the path to the user config file.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.yaml"))
    }

    /// Get the path to the user config directory.
    ///
    /// Cross-platform behavior:
    /// - If `XDG_CONFIG_HOME` is set, uses `$XDG_CONFIG_HOME/buoy-i18n`
    /// - Linux/macOS: Falls back to `~/.config/buoy-i18n` (XDG default)
    /// - Windows: Falls back to `%APPDATA%\buoy-i18n`
    #[must_use]
    pub fn config_dir() -> Option<PathBuf> {
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
            && !xdg_config.is_empty()
        {
            return Some(PathBuf::from(xdg_config).join("buoy-i18n"));
        }

        #[cfg(windows)]
        {
            dirs::config_dir().map(|p| p.join("buoy-i18n"))
        }

        #[cfg(not(windows))]
        {
            dirs::home_dir().map(|p| p.join(".config").join("buoy-i18n"))
        }
    }
}
