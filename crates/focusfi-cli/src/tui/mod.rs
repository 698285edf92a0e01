//! Interactive terminal front end.
//!
//! The loop redraws, applies pending timer ticks and forwards key presses to
//! the [`AppShell`]. All state lives in the shell; this module only maps keys
//! to commands.

mod terminal;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEventKind};
use focusfi_core::{AppShell, DailyHours, FocusCategory, OnboardingWizard, ScreenKind, WizardStep};
use ratatui::prelude::*;

pub use terminal::{install_panic_hook, TerminalGuard};

/// Upper bound on input latency and redraw interval.
const FRAME: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, shell: &mut AppShell) -> io::Result<()> {
    loop {
        shell.pump();
        terminal.draw(|f| ui::draw(f, shell))?;

        if event::poll(FRAME)? {
            if let TermEvent::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(shell, key.code) == Flow::Quit {
                    return Ok(());
                }
            }
        }
    }
}

pub fn handle_key(shell: &mut AppShell, code: KeyCode) -> Flow {
    if matches!(code, KeyCode::Char('q') | KeyCode::Esc) {
        return Flow::Quit;
    }
    match shell.screen_kind() {
        ScreenKind::Welcome => {
            if code == KeyCode::Enter {
                shell.start_journey();
            }
        }
        ScreenKind::Onboarding => {
            if code == KeyCode::Enter {
                shell.advance_onboarding();
            } else if let Some(wizard) = shell.wizard_mut() {
                onboarding_key(wizard, code);
            }
        }
        ScreenKind::Home => home_key(shell, code),
    }
    Flow::Continue
}

fn onboarding_key(wizard: &mut OnboardingWizard, code: KeyCode) {
    match wizard.step() {
        WizardStep::Step1 => {
            let options = FocusCategory::ALL;
            let current = wizard
                .state()
                .focus
                .and_then(|f| options.iter().position(|o| *o == f));
            let picked = match code {
                KeyCode::Down => Some(current.map_or(0, |i| (i + 1) % options.len())),
                KeyCode::Up => Some(current.map_or(options.len() - 1, |i| {
                    (i + options.len() - 1) % options.len()
                })),
                KeyCode::Char(c @ '1'..='4') => Some(c as usize - '1' as usize),
                _ => None,
            };
            if let Some(i) = picked {
                wizard.set_focus(options[i]);
            }
        }
        WizardStep::Step2 => match code {
            KeyCode::Char('y') => wizard.set_motivation(true),
            KeyCode::Char('n') => wizard.set_motivation(false),
            KeyCode::Up | KeyCode::Down => {
                let flipped = !wizard.state().motivation;
                wizard.set_motivation(flipped);
            }
            _ => {}
        },
        WizardStep::Step3 => {
            let steps = match code {
                KeyCode::Right | KeyCode::Up => 1,
                KeyCode::Left | KeyCode::Down => -1,
                _ => 0,
            };
            if steps != 0 {
                let hours = DailyHours::nudge(wizard.state().daily_hours, steps);
                wizard.set_daily_hours(hours);
            }
        }
    }
}

fn home_key(shell: &mut AppShell, code: KeyCode) {
    match code {
        KeyCode::Char('s') => {
            shell.open_settings();
        }
        KeyCode::Char(' ') => {
            if let Some(home) = shell.home_mut() {
                home.timer.toggle();
            }
        }
        KeyCode::Char('r') => {
            if let Some(home) = shell.home_mut() {
                home.timer.reset();
            }
        }
        _ => {}
    }
}
