use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

const DEFAULT_FOCUS_SECS: u64 = 25 * 60;
const DEFAULT_BREAK_SECS: u64 = 5 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Focus,
    Break,
}

impl Phase {
    /// The phase that follows this one. Focus and Break strictly alternate.
    pub fn next(self) -> Self {
        match self {
            Phase::Focus => Phase::Break,
            Phase::Break => Phase::Focus,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Phase::Focus => "Focus Time",
            Phase::Break => "Break Time",
        }
    }
}

/// Durations for both phases, fixed for the lifetime of an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerConfig {
    focus_duration_secs: u64,
    break_duration_secs: u64,
    /// Keep counting into the next phase after a transition.
    /// When false the transition tick also stops the timer.
    auto_continue: bool,
}

impl TimerConfig {
    /// Build a config, rejecting zero-length phases.
    pub fn new(focus_duration_secs: u64, break_duration_secs: u64) -> Result<Self, ValidationError> {
        if focus_duration_secs == 0 {
            return Err(ValidationError::InvalidValue {
                field: "focus_duration".into(),
                message: "must be at least one second".into(),
            });
        }
        if break_duration_secs == 0 {
            return Err(ValidationError::InvalidValue {
                field: "break_duration".into(),
                message: "must be at least one second".into(),
            });
        }
        Ok(Self {
            focus_duration_secs,
            break_duration_secs,
            auto_continue: true,
        })
    }

    /// Build a config from whole minutes.
    ///
    /// Uses saturating arithmetic so huge values cannot overflow.
    pub fn from_minutes(focus_min: u64, break_min: u64) -> Result<Self, ValidationError> {
        Self::new(focus_min.saturating_mul(60), break_min.saturating_mul(60))
    }

    pub fn with_auto_continue(mut self, auto_continue: bool) -> Self {
        self.auto_continue = auto_continue;
        self
    }

    pub fn focus_duration_secs(&self) -> u64 {
        self.focus_duration_secs
    }

    pub fn break_duration_secs(&self) -> u64 {
        self.break_duration_secs
    }

    pub fn auto_continue(&self) -> bool {
        self.auto_continue
    }

    /// Configured length of `phase` in seconds.
    pub fn duration_secs(&self, phase: Phase) -> u64 {
        match phase {
            Phase::Focus => self.focus_duration_secs,
            Phase::Break => self.break_duration_secs,
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            focus_duration_secs: DEFAULT_FOCUS_SECS,
            break_duration_secs: DEFAULT_BREAK_SECS,
            auto_continue: true,
        }
    }
}
