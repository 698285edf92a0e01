mod config;

pub use config::{Config, LoggingConfig, TimerSection};

use std::path::PathBuf;

/// Returns `~/.config/focusfi[-dev]/` based on FOCUSFI_ENV.
///
/// Set FOCUSFI_ENV=dev to use the development directory. The directory is
/// not created; nothing is ever written there by the application.
pub fn config_dir() -> PathBuf {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("FOCUSFI_ENV").unwrap_or_else(|_| "production".to_string());

    if env == "dev" {
        base_dir.join("focusfi-dev")
    } else {
        base_dir.join("focusfi")
    }
}
