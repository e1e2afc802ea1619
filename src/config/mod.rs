//! Configuration management for Shopdeck.
//!
//! This module handles loading, saving, and validating the user's settings
//! file. Settings live in a TOML file in the platform config directory,
//! e.g. `~/.config/shopdeck/config.toml` on Linux.

mod settings;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub use settings::{Settings, PAGE_NAMES};

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine configuration directory")]
    NoConfigDir,

    /// The config directory could not be created.
    #[error("could not create configuration directory: {0}")]
    CreateDirError(std::io::Error),

    /// The config file could not be read.
    #[error("could not read configuration file: {0}")]
    ReadError(std::io::Error),

    /// The config file could not be written.
    #[error("could not write configuration file: {0}")]
    WriteError(std::io::Error),

    /// The config file is not valid TOML.
    #[error("could not parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// The settings could not be serialized.
    #[error("could not serialize configuration: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// The settings failed validation.
    #[error("invalid configuration: {0}")]
    ValidationError(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// The application configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Application settings.
    #[serde(default)]
    pub settings: Settings,
}

impl Config {
    /// Load the configuration from the default location.
    ///
    /// A missing file yields the default configuration; an unreadable or
    /// invalid file is an error.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_file()?)
    }

    /// Load the configuration from a specific path.
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&contents)?;
        config.settings.validate()?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(Self::config_file()?)
    }

    /// Save the configuration to a specific path.
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        self.settings.validate()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::CreateDirError)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(ConfigError::WriteError)?;
        debug!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Load the configuration, falling back to defaults on any failure.
    ///
    /// Used at startup so a broken config file degrades gracefully instead
    /// of preventing launch.
    pub fn load_or_default() -> Self {
        Config::load().unwrap_or_else(|e| {
            warn!("failed to load config, using defaults: {}", e);
            Config::default()
        })
    }

    /// Path of the config file in the platform config directory.
    fn config_file() -> Result<PathBuf> {
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(base.join("shopdeck").join("config.toml"))
    }
}
