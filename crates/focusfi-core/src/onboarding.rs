//! Three-step onboarding wizard.
//!
//! Step 1 picks a focus category, step 2 the motivation preference, step 3
//! the daily hour goal. Only step 1 is gated: the wizard will not move on
//! until a focus is chosen. Gated or malformed commands are ignored, the way
//! a disabled button ignores clicks.

use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::events::Event;

/// What the user mainly wants to focus on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusCategory {
    Studying,
    Work,
    Fitness,
    General,
}

impl FocusCategory {
    pub const ALL: [FocusCategory; 4] = [
        FocusCategory::Studying,
        FocusCategory::Work,
        FocusCategory::Fitness,
        FocusCategory::General,
    ];

    pub fn id(self) -> &'static str {
        match self {
            FocusCategory::Studying => "studying",
            FocusCategory::Work => "work",
            FocusCategory::Fitness => "fitness",
            FocusCategory::General => "general",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FocusCategory::Studying => "Studying",
            FocusCategory::Work => "Work",
            FocusCategory::Fitness => "Fitness",
            FocusCategory::General => "General Productivity",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            FocusCategory::Studying => "📚",
            FocusCategory::Work => "💼",
            FocusCategory::Fitness => "💪",
            FocusCategory::General => "🎯",
        }
    }
}

impl fmt::Display for FocusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for FocusCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FocusCategory::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| ValidationError::InvalidValue {
                field: "focus".into(),
                message: format!("unknown focus '{s}', expected one of studying, work, fitness, general"),
            })
    }
}

/// The daily-hours slider. The wizard trusts whatever value it is given;
/// this helper is what keeps slider input on the grid.
pub struct DailyHours;

impl DailyHours {
    pub const MIN: f64 = 1.0;
    pub const MAX: f64 = 12.0;
    pub const STEP: f64 = 0.5;
    pub const DEFAULT: f64 = 4.0;

    /// Clamp into range and round to the nearest step.
    pub fn snap(value: f64) -> f64 {
        if value.is_nan() {
            return Self::DEFAULT;
        }
        let clamped = value.clamp(Self::MIN, Self::MAX);
        (clamped / Self::STEP).round() * Self::STEP
    }

    /// Move `value` by `steps` slider steps.
    pub fn nudge(value: f64, steps: i32) -> f64 {
        Self::snap(value + steps as f64 * Self::STEP)
    }
}

/// Answers collected so far. `focus: None` means not chosen yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnboardingState {
    pub focus: Option<FocusCategory>,
    pub motivation: bool,
    pub daily_hours: f64,
}

impl Default for OnboardingState {
    fn default() -> Self {
        Self {
            focus: None,
            motivation: true,
            daily_hours: DailyHours::DEFAULT,
        }
    }
}

/// Completed onboarding answers, handed to the home screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnboardingData {
    pub focus: FocusCategory,
    pub motivation: bool,
    pub daily_hours: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardStep {
    Step1,
    Step2,
    Step3,
}

impl WizardStep {
    /// 1-based step number.
    pub fn number(self) -> u8 {
        match self {
            WizardStep::Step1 => 1,
            WizardStep::Step2 => 2,
            WizardStep::Step3 => 3,
        }
    }

    pub fn question(self) -> &'static str {
        match self {
            WizardStep::Step1 => "What's your main focus?",
            WizardStep::Step2 => "Do you need motivation?",
            WizardStep::Step3 => "Daily focus goal?",
        }
    }

    fn next(self) -> Option<Self> {
        match self {
            WizardStep::Step1 => Some(WizardStep::Step2),
            WizardStep::Step2 => Some(WizardStep::Step3),
            WizardStep::Step3 => None,
        }
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        WizardStep::Step1
    }
}

/// Outcome of [`OnboardingWizard::advance`].
#[derive(Debug, Clone, PartialEq)]
pub enum WizardProgress {
    /// Advancing is not allowed yet. Nothing changed.
    Blocked,
    /// Moved to the given step.
    Moved(WizardStep),
    /// The last step was confirmed. The wizard is done and should be dropped.
    Completed(OnboardingData),
}

impl WizardProgress {
    /// Event describing this outcome, if anything happened.
    pub fn to_event(&self) -> Option<Event> {
        match self {
            WizardProgress::Blocked => None,
            WizardProgress::Moved(step) => Some(Event::OnboardingAdvanced {
                step: *step,
                at: Utc::now(),
            }),
            WizardProgress::Completed(data) => Some(Event::OnboardingCompleted {
                data: data.clone(),
                at: Utc::now(),
            }),
        }
    }
}

/// Linear three-step wizard.
#[derive(Debug, Clone, Default)]
pub struct OnboardingWizard {
    step: WizardStep,
    state: OnboardingState,
}

impl OnboardingWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn state(&self) -> &OnboardingState {
        &self.state
    }

    pub fn set_focus(&mut self, focus: FocusCategory) {
        self.state.focus = Some(focus);
    }

    /// Select a focus by id. Unknown ids are ignored.
    pub fn set_focus_id(&mut self, id: &str) {
        match id.parse::<FocusCategory>() {
            Ok(focus) => self.set_focus(focus),
            Err(e) => tracing::debug!(%e, "ignoring focus selection"),
        }
    }

    pub fn set_motivation(&mut self, motivation: bool) {
        self.state.motivation = motivation;
    }

    /// Stored as given. Range and step are the slider's job, see [`DailyHours`].
    pub fn set_daily_hours(&mut self, hours: f64) {
        self.state.daily_hours = hours;
    }

    /// False only on step 1 while no focus is chosen.
    pub fn can_advance(&self) -> bool {
        match self.step {
            WizardStep::Step1 => self.state.focus.is_some(),
            WizardStep::Step2 | WizardStep::Step3 => true,
        }
    }

    /// Label of the primary control on the current step.
    pub fn advance_label(&self) -> &'static str {
        match self.step {
            WizardStep::Step3 => "Start Focusing",
            _ => "Continue",
        }
    }

    pub fn advance(&mut self) -> WizardProgress {
        if !self.can_advance() {
            tracing::debug!(step = self.step.number(), "advance ignored, focus not chosen");
            return WizardProgress::Blocked;
        }
        match self.step.next() {
            Some(next) => {
                self.step = next;
                tracing::debug!(step = next.number(), "onboarding advanced");
                WizardProgress::Moved(next)
            }
            None => match self.completed_data() {
                Some(data) => {
                    tracing::info!(focus = %data.focus, "onboarding completed");
                    WizardProgress::Completed(data)
                }
                None => WizardProgress::Blocked,
            },
        }
    }

    fn completed_data(&self) -> Option<OnboardingData> {
        Some(OnboardingData {
            focus: self.state.focus?,
            motivation: self.state.motivation,
            daily_hours: self.state.daily_hours,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state() {
        let w = OnboardingWizard::new();
        assert_eq!(w.step(), WizardStep::Step1);
        assert_eq!(w.state().focus, None);
        assert!(w.state().motivation);
        assert_eq!(w.state().daily_hours, 4.0);
        assert_eq!(w.advance_label(), "Continue");
    }

    #[test]
    fn advance_blocked_without_focus() {
        let mut w = OnboardingWizard::new();
        assert!(!w.can_advance());
        assert_eq!(w.advance(), WizardProgress::Blocked);
        assert_eq!(w.step(), WizardStep::Step1);
        assert!(w.advance().to_event().is_none());
    }

    #[test]
    fn any_valid_focus_unblocks_step1() {
        for focus in FocusCategory::ALL {
            let mut w = OnboardingWizard::new();
            w.set_focus(focus);
            assert_eq!(w.advance(), WizardProgress::Moved(WizardStep::Step2));
        }
    }

    #[test]
    fn unknown_focus_id_is_ignored() {
        let mut w = OnboardingWizard::new();
        w.set_focus_id("gaming");
        assert_eq!(w.state().focus, None);
        w.set_focus_id("work");
        w.set_focus_id("");
        assert_eq!(w.state().focus, Some(FocusCategory::Work));
    }

    #[test]
    fn later_steps_are_never_gated() {
        let mut w = OnboardingWizard::new();
        w.set_focus(FocusCategory::Fitness);
        w.advance();
        assert!(w.can_advance());
        w.advance();
        assert!(w.can_advance());
        assert_eq!(w.advance_label(), "Start Focusing");
    }

    #[test]
    fn full_flow_emits_data() {
        let mut w = OnboardingWizard::new();
        w.set_focus_id("studying");
        w.advance();
        w.set_motivation(false);
        w.advance();
        w.set_daily_hours(7.5);
        match w.advance() {
            WizardProgress::Completed(data) => {
                assert_eq!(data.focus, FocusCategory::Studying);
                assert!(!data.motivation);
                assert_eq!(data.daily_hours, 7.5);
            }
            other => panic!("Expected Completed, got {:?}", other),
        }
    }

    #[test]
    fn field_edits_stay_on_step_and_surface_in_completion() {
        let mut w = OnboardingWizard::new();
        w.set_focus(FocusCategory::Work);
        w.set_motivation(false);
        w.set_daily_hours(6.0);
        assert_eq!(w.step(), WizardStep::Step1);

        w.advance();
        w.advance();
        match w.advance().to_event() {
            Some(Event::OnboardingCompleted { data, .. }) => {
                assert_eq!(data.focus, FocusCategory::Work);
                assert!(!data.motivation);
                assert_eq!(data.daily_hours, 6.0);
            }
            other => panic!("Expected OnboardingCompleted, got {:?}", other),
        }
    }

    #[test]
    fn wizard_does_not_revalidate_hours() {
        let mut w = OnboardingWizard::new();
        w.set_daily_hours(30.0);
        assert_eq!(w.state().daily_hours, 30.0);
    }

    #[test]
    fn focus_category_parsing() {
        assert_eq!("fitness".parse::<FocusCategory>().unwrap(), FocusCategory::Fitness);
        assert!("Work".parse::<FocusCategory>().is_err());
        assert_eq!(FocusCategory::General.label(), "General Productivity");
        assert_eq!(FocusCategory::Studying.to_string(), "studying");
    }

    #[test]
    fn daily_hours_snaps_to_grid() {
        assert_eq!(DailyHours::snap(0.0), 1.0);
        assert_eq!(DailyHours::snap(99.0), 12.0);
        assert_eq!(DailyHours::snap(6.3), 6.5);
        assert_eq!(DailyHours::snap(6.2), 6.0);
        assert_eq!(DailyHours::snap(f64::NAN), 4.0);
        assert_eq!(DailyHours::nudge(4.0, 1), 4.5);
        assert_eq!(DailyHours::nudge(1.0, -3), 1.0);
        assert_eq!(DailyHours::nudge(11.5, 4), 12.0);
    }

    #[test]
    fn progress_events() {
        assert!(matches!(
            WizardProgress::Moved(WizardStep::Step2).to_event(),
            Some(Event::OnboardingAdvanced { step: WizardStep::Step2, .. })
        ));
    }
}
