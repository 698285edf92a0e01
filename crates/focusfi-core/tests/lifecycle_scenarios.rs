//! End-to-end scenarios across the timer, wizard and shell.

use std::time::Duration;

use focusfi_core::{
    AppShell, Event, FocusCategory, FocusTimerEngine, OnboardingData, OnboardingWizard, Phase,
    ScreenKind, TimerConfig, WizardProgress, WizardStep,
};

#[test]
fn short_focus_and_break_cycle() {
    let mut engine = FocusTimerEngine::new(TimerConfig::new(2, 1).unwrap());
    engine.start();

    engine.tick();
    engine.tick();
    let s = engine.state();
    assert_eq!(s.phase, Phase::Break);
    assert_eq!(s.remaining_seconds, 1);
    assert_eq!(s.completed_focus_sessions, 1);

    engine.tick();
    let s = engine.state();
    assert_eq!(s.phase, Phase::Focus);
    assert_eq!(s.remaining_seconds, 2);
    assert_eq!(s.completed_focus_sessions, 1);
}

#[test]
fn wizard_walkthrough() {
    let mut wizard = OnboardingWizard::new();
    let state = wizard.state();
    assert_eq!(state.focus, None);
    assert!(state.motivation);
    assert_eq!(state.daily_hours, 4.0);

    assert_eq!(wizard.advance(), WizardProgress::Blocked);
    assert_eq!(wizard.step(), WizardStep::Step1);

    wizard.set_focus_id("work");
    assert_eq!(wizard.advance(), WizardProgress::Moved(WizardStep::Step2));

    wizard.set_motivation(false);
    assert_eq!(wizard.advance(), WizardProgress::Moved(WizardStep::Step3));

    wizard.set_daily_hours(6.0);
    assert_eq!(
        wizard.advance(),
        WizardProgress::Completed(OnboardingData {
            focus: FocusCategory::Work,
            motivation: false,
            daily_hours: 6.0,
        })
    );
}

#[test]
fn completed_data_serializes_with_focus_id() {
    let data = OnboardingData {
        focus: FocusCategory::Studying,
        motivation: true,
        daily_hours: 2.5,
    };
    let json = serde_json::to_value(&data).unwrap();
    assert_eq!(json["focus"], "studying");
    assert_eq!(json["daily_hours"], 2.5);
}

#[tokio::test(start_paused = true)]
async fn shell_runs_timer_on_home() {
    let config = TimerConfig::new(2, 1).unwrap();
    let mut shell = AppShell::new(config, tokio::runtime::Handle::current());

    shell.start_journey();
    let wizard = shell.wizard_mut().unwrap();
    wizard.set_focus(FocusCategory::Fitness);
    shell.advance_onboarding();
    shell.advance_onboarding();
    let events = shell.advance_onboarding();
    assert!(matches!(
        events.as_slice(),
        [
            Event::OnboardingCompleted { .. },
            Event::ScreenChanged {
                from: ScreenKind::Onboarding,
                to: ScreenKind::Home,
                ..
            }
        ]
    ));

    let home = shell.home_mut().unwrap();
    assert!(home.view.quote.is_some());
    home.timer.start();

    tokio::time::sleep(Duration::from_millis(2_500)).await;
    let events = shell.pump();
    assert_eq!(events.len(), 1);
    let engine = shell.home().unwrap().timer.engine();
    assert_eq!(engine.phase(), Phase::Break);
    assert_eq!(engine.completed_focus_sessions(), 1);
    assert!(engine.is_running());
}
