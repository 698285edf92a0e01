//! Top-level screen selection.
//!
//! ```text
//! Welcome --start_journey--> Onboarding --wizard completes--> Home
//! ```
//!
//! Home is terminal for the session. The completed [`OnboardingData`] lives
//! inside the `Home` variant, so the home screen cannot exist without it.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::runtime::Handle;

use crate::events::Event;
use crate::home::{FocusStats, HomeView, PlaceholderStats, QuoteBook};
use crate::onboarding::{OnboardingData, OnboardingWizard, WizardProgress};
use crate::timer::{FocusTimer, TimerConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenKind {
    Welcome,
    Onboarding,
    Home,
}

/// State owned by the home screen.
#[derive(Debug)]
pub struct HomeScreen {
    pub data: OnboardingData,
    pub view: HomeView,
    pub timer: FocusTimer,
}

#[derive(Debug)]
pub enum Screen {
    Welcome,
    Onboarding(OnboardingWizard),
    Home(HomeScreen),
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Welcome => ScreenKind::Welcome,
            Screen::Onboarding(_) => ScreenKind::Onboarding,
            Screen::Home(_) => ScreenKind::Home,
        }
    }
}

/// Owns the current screen and everything that lives on it.
pub struct AppShell {
    screen: Screen,
    timer_config: TimerConfig,
    runtime: Handle,
    stats: Box<dyn FocusStats>,
}

impl AppShell {
    pub fn new(timer_config: TimerConfig, runtime: Handle) -> Self {
        Self {
            screen: Screen::Welcome,
            timer_config,
            runtime,
            stats: Box::new(PlaceholderStats),
        }
    }

    /// Replace the statistics provider used when the home screen is built.
    pub fn with_stats(mut self, stats: Box<dyn FocusStats>) -> Self {
        self.stats = stats;
        self
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_kind(&self) -> ScreenKind {
        self.screen.kind()
    }

    /// Welcome -> Onboarding. Ignored on any other screen.
    pub fn start_journey(&mut self) -> Option<Event> {
        match self.screen {
            Screen::Welcome => {
                self.screen = Screen::Onboarding(OnboardingWizard::new());
                Some(self.changed(ScreenKind::Welcome))
            }
            _ => None,
        }
    }

    pub fn wizard(&self) -> Option<&OnboardingWizard> {
        match &self.screen {
            Screen::Onboarding(wizard) => Some(wizard),
            _ => None,
        }
    }

    pub fn wizard_mut(&mut self) -> Option<&mut OnboardingWizard> {
        match &mut self.screen {
            Screen::Onboarding(wizard) => Some(wizard),
            _ => None,
        }
    }

    /// Advance the wizard. When it completes, the wizard is dropped and the
    /// shell moves to Home with the collected data.
    ///
    /// Completion yields `OnboardingCompleted` followed by `ScreenChanged`.
    /// A blocked advance, or any call off the onboarding screen, yields nothing.
    pub fn advance_onboarding(&mut self) -> Vec<Event> {
        let Screen::Onboarding(wizard) = &mut self.screen else {
            return Vec::new();
        };
        let progress = wizard.advance();
        let mut events: Vec<Event> = progress.to_event().into_iter().collect();
        if let WizardProgress::Completed(data) = progress {
            events.push(self.enter_home(data));
        }
        events
    }

    pub fn home(&self) -> Option<&HomeScreen> {
        match &self.screen {
            Screen::Home(home) => Some(home),
            _ => None,
        }
    }

    pub fn home_mut(&mut self) -> Option<&mut HomeScreen> {
        match &mut self.screen {
            Screen::Home(home) => Some(home),
            _ => None,
        }
    }

    /// Apply pending timer ticks, if the home screen is showing.
    pub fn pump(&mut self) -> Vec<Event> {
        self.home_mut()
            .map(|home| home.timer.pump())
            .unwrap_or_default()
    }

    /// Settings are not implemented; the entry point exists but does nothing.
    pub fn open_settings(&self) -> Option<Event> {
        tracing::debug!("settings requested");
        None
    }

    fn enter_home(&mut self, data: OnboardingData) -> Event {
        let quote = QuoteBook::pick(&mut rand::thread_rng());
        let view = HomeView::new(&data, self.stats.as_ref(), quote);
        let timer = FocusTimer::new(self.timer_config, self.runtime.clone());
        self.screen = Screen::Home(HomeScreen { data, view, timer });
        self.changed(ScreenKind::Onboarding)
    }

    fn changed(&self, from: ScreenKind) -> Event {
        let to = self.screen.kind();
        tracing::info!(?from, ?to, "screen changed");
        Event::ScreenChanged {
            from,
            to,
            at: Utc::now(),
        }
    }
}
