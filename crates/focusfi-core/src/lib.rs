//! # FocusFi Core Library
//!
//! Business logic for the FocusFi focus timer. The terminal front end in
//! `focusfi-cli` is a thin presentation layer over this crate: it renders
//! state and forwards user commands, nothing more.
//!
//! ## Architecture
//!
//! - **Timer Engine**: a pure focus/break countdown state machine; the caller
//!   delivers one `tick()` per second
//! - **Tick Adapter**: a cancellable tokio interval that drives the engine
//!   only while it runs
//! - **Onboarding**: three-step wizard collecting the user's focus, motivation
//!   preference and daily goal
//! - **Shell**: Welcome -> Onboarding -> Home screen selection
//! - **Storage**: read-only TOML configuration
//!
//! ## Key Components
//!
//! - [`FocusTimerEngine`]: countdown state machine
//! - [`FocusTimer`]: engine plus its one-second tick source
//! - [`OnboardingWizard`]: onboarding state machine
//! - [`AppShell`]: screen selection and ownership of cross-screen state
//! - [`Config`]: application configuration

pub mod error;
pub mod events;
pub mod home;
pub mod onboarding;
pub mod shell;
pub mod storage;
pub mod timer;

pub use error::{ConfigError, CoreError, ValidationError};
pub use events::Event;
pub use home::{FocusStats, HomeView, PlaceholderStats, QuickStats, QuoteBook};
pub use onboarding::{
    DailyHours, FocusCategory, OnboardingData, OnboardingState, OnboardingWizard, WizardProgress,
    WizardStep,
};
pub use shell::{AppShell, HomeScreen, Screen, ScreenKind};
pub use storage::Config;
pub use timer::{FocusTimer, FocusTimerEngine, Phase, TimerConfig, TimerState};
