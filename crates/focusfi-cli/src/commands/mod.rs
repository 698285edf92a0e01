pub mod config;
pub mod onboard;
pub mod run;
pub mod timer;

use std::path::PathBuf;

use focusfi_core::{Config, TimerConfig};

/// Effective configuration and where it came from.
pub struct Context {
    pub config: Config,
    pub config_path: PathBuf,
}

impl Context {
    pub fn load(path: Option<PathBuf>) -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = path.unwrap_or_else(Config::default_path);
        let config = Config::load_from(&config_path)?;
        Ok(Self {
            config,
            config_path,
        })
    }

    /// Timer settings from the config, with optional per-run overrides in seconds.
    pub fn timer_config(
        &self,
        focus_secs: Option<u64>,
        break_secs: Option<u64>,
    ) -> Result<TimerConfig, Box<dyn std::error::Error>> {
        let base = self.config.timer_config()?;
        let config = TimerConfig::new(
            focus_secs.unwrap_or(base.focus_duration_secs()),
            break_secs.unwrap_or(base.break_duration_secs()),
        )?;
        Ok(config.with_auto_continue(base.auto_continue()))
    }
}
