use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::onboarding::{OnboardingData, WizardStep};
use crate::shell::ScreenKind;
use crate::timer::Phase;

/// Every state change in the system produces an Event.
/// Commands that are ignored produce none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        phase: Phase,
        remaining_seconds: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_seconds: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        completed_focus_sessions: u32,
        at: DateTime<Utc>,
    },
    /// A countdown reached zero and the engine switched phase.
    PhaseCompleted {
        completed: Phase,
        next: Phase,
        completed_focus_sessions: u32,
        next_duration_seconds: u64,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        phase: Phase,
        remaining_seconds: u64,
        total_seconds: u64,
        running: bool,
        completed_focus_sessions: u32,
        progress_percent: f64,
        at: DateTime<Utc>,
    },
    OnboardingAdvanced {
        step: WizardStep,
        at: DateTime<Utc>,
    },
    OnboardingCompleted {
        data: OnboardingData,
        at: DateTime<Utc>,
    },
    ScreenChanged {
        from: ScreenKind,
        to: ScreenKind,
        at: DateTime<Utc>,
    },
}
