//! TOML-based application configuration.
//!
//! Stores the injected reference date and the analytics window size.
//! Configuration is stored at `<data_dir>/config.toml`. The default
//! habit set lives in [`crate::habit::default_habits`]; it is a product
//! constant, not a user setting.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::date::{parse_date_key, DEFAULT_TODAY};
use crate::error::{ConfigError, Result};

/// Application configuration.
///
/// Serialized to/from TOML at `<data_dir>/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Reference "today" used by every derivation. The core never reads
    /// the system clock.
    #[serde(default = "default_today")]
    pub today: String,
    /// Number of days in the analytics window.
    #[serde(default = "default_window_days")]
    pub window_days: u32,
}

fn default_today() -> String {
    DEFAULT_TODAY.to_string()
}

fn default_window_days() -> u32 {
    14
}

impl Default for Config {
    fn default() -> Self {
        Self {
            today: default_today(),
            window_days: default_window_days(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf> {
        Ok(super::data_dir()?.join("config.toml"))
    }

    /// Load from disk or write and return the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path,
                    message: e.to_string(),
                })?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Get a config value as string by key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "today" => Some(self.today.clone()),
            "window_days" => Some(self.window_days.to_string()),
            _ => None,
        }
    }

    /// Set a config value by key. Validates without touching disk;
    /// callers persist with [`Config::save`].
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value cannot be
    /// parsed.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "today" => {
                parse_date_key(value)?;
                self.today = value.to_string();
            }
            "window_days" => {
                let days: u32 = value.parse().map_err(|_| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: format!("cannot parse '{value}' as a number of days"),
                })?;
                if days == 0 {
                    return Err(ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: "window must cover at least one day".to_string(),
                    }
                    .into());
                }
                self.window_days = days;
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string()).into()),
        }
        Ok(())
    }
}
