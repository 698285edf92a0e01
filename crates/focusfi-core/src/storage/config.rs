//! TOML-based application configuration.
//!
//! Holds the timer durations and the default log filter. The file is
//! user-authored and read-only from the application's point of view: a
//! missing file means defaults, and nothing is saved back.
//!
//! Default location is `~/.config/focusfi/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::config_dir;
use crate::error::{ConfigError, CoreError, Result};
use crate::timer::TimerConfig;

/// Timer configuration, durations in minutes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerSection {
    #[serde(default = "default_focus_duration")]
    pub focus_duration: u32,
    #[serde(default = "default_break_duration")]
    pub break_duration: u32,
    /// Roll straight into the next phase when a countdown finishes.
    #[serde(default = "default_true")]
    pub auto_advance: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timer: TimerSection,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_focus_duration() -> u32 {
    25
}
fn default_break_duration() -> u32 {
    5
}
fn default_true() -> bool {
    true
}
fn default_filter() -> String {
    "info".into()
}

impl Default for TimerSection {
    fn default() -> Self {
        Self {
            focus_duration: default_focus_duration(),
            break_duration: default_break_duration(),
            auto_advance: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    /// Default config file path.
    pub fn default_path() -> PathBuf {
        config_dir().join("config.toml")
    }

    /// Load from `path`. A missing file yields defaults; a present but
    /// malformed file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
            .into()),
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(content).map_err(ConfigError::from)?;
        cfg.timer_config()?;
        Ok(cfg)
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Validated timer settings.
    pub fn timer_config(&self) -> Result<TimerConfig> {
        let config = TimerConfig::from_minutes(
            self.timer.focus_duration as u64,
            self.timer.break_duration as u64,
        )
        .map_err(|e| {
            CoreError::from(ConfigError::InvalidValue {
                key: "timer".into(),
                message: e.to_string(),
            })
        })?;
        Ok(config.with_auto_continue(self.timer.auto_advance))
    }
}
