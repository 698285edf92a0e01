//! Home screen view model.
//!
//! Everything the home screen shows apart from the timer itself: the daily
//! goal card, quick stats and the optional motivational quote. Statistics come
//! from a [`FocusStats`] provider; no real analytics exist yet, so the only
//! provider returns fixed placeholder numbers.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::onboarding::{FocusCategory, OnboardingData};

pub const APP_TITLE: &str = "FocusFi";

/// Source of the numbers on the stats cards.
pub trait FocusStats {
    /// Minutes focused today.
    fn focused_today_minutes(&self) -> u32;
    fn day_streak(&self) -> u32;
    fn total_sessions(&self) -> u32;
    fn week_minutes(&self) -> u32;
}

/// Fixed demo values.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderStats;

impl FocusStats for PlaceholderStats {
    fn focused_today_minutes(&self) -> u32 {
        125
    }

    fn day_streak(&self) -> u32 {
        7
    }

    fn total_sessions(&self) -> u32 {
        18
    }

    fn week_minutes(&self) -> u32 {
        42 * 60 + 30
    }
}

pub struct QuoteBook;

impl QuoteBook {
    pub const QUOTES: [&'static str; 4] = [
        "Focus is the gateway to thinking clearly.",
        "Concentrate all your thoughts upon the work at hand.",
        "Success is the result of preparation, hard work, and learning from failure.",
        "The successful warrior is the average person with laser-like focus.",
    ];

    pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
        Self::QUOTES.choose(rng).copied().unwrap_or(Self::QUOTES[0])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuickStats {
    pub day_streak: u32,
    pub sessions: u32,
    pub week_minutes: u32,
}

impl QuickStats {
    /// e.g. `42h 30m`
    pub fn week_label(&self) -> String {
        format_hours_minutes(self.week_minutes)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeView {
    pub focus: FocusCategory,
    pub avatar_initial: char,
    pub focus_title: String,
    pub daily_hours: f64,
    pub daily_goal_minutes: f64,
    pub focused_today_minutes: u32,
    /// Goal progress, 0..=100.
    pub goal_progress_percent: f64,
    pub stats: QuickStats,
    /// Present only when the user asked for motivation.
    pub quote: Option<&'static str>,
}

impl HomeView {
    pub fn new(data: &OnboardingData, stats: &dyn FocusStats, quote: &'static str) -> Self {
        let focused_today = stats.focused_today_minutes();
        let daily_goal_minutes = data.daily_hours * 60.0;
        let goal_progress_percent = if daily_goal_minutes > 0.0 {
            (focused_today as f64 / daily_goal_minutes * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };

        Self {
            focus: data.focus,
            avatar_initial: avatar_initial(data.focus),
            focus_title: capitalize(data.focus.id()),
            daily_hours: data.daily_hours,
            daily_goal_minutes,
            focused_today_minutes: focused_today,
            goal_progress_percent,
            stats: QuickStats {
                day_streak: stats.day_streak(),
                sessions: stats.total_sessions(),
                week_minutes: stats.week_minutes(),
            },
            quote: data.motivation.then_some(quote),
        }
    }

    /// e.g. `📚 Studying`
    pub fn goal_heading(&self) -> String {
        format!("{} {}", self.focus.icon(), self.focus_title)
    }

    /// e.g. `2h 5m / 4h`
    pub fn goal_line(&self) -> String {
        format!(
            "{} / {}h",
            format_hours_minutes(self.focused_today_minutes),
            self.daily_hours
        )
    }
}

fn avatar_initial(focus: FocusCategory) -> char {
    focus
        .id()
        .chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('?')
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn format_hours_minutes(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn data(focus: FocusCategory, motivation: bool, hours: f64) -> OnboardingData {
        OnboardingData {
            focus,
            motivation,
            daily_hours: hours,
        }
    }

    #[test]
    fn goal_card_from_onboarding() {
        let view = HomeView::new(&data(FocusCategory::Work, true, 4.0), &PlaceholderStats, "q");
        assert_eq!(view.avatar_initial, 'W');
        assert_eq!(view.focus_title, "Work");
        assert_eq!(view.goal_heading(), "💼 Work");
        assert_eq!(view.daily_goal_minutes, 240.0);
        assert_eq!(view.goal_line(), "2h 5m / 4h");
        assert_eq!(view.goal_progress_percent.round(), 52.0);
    }

    #[test]
    fn general_focus_uses_id_for_title() {
        let view = HomeView::new(&data(FocusCategory::General, true, 1.5), &PlaceholderStats, "q");
        assert_eq!(view.focus_title, "General");
        assert_eq!(view.avatar_initial, 'G');
        assert_eq!(view.goal_line(), "2h 5m / 1.5h");
    }

    #[test]
    fn progress_is_clamped_for_display() {
        let view = HomeView::new(&data(FocusCategory::Fitness, true, 1.0), &PlaceholderStats, "q");
        assert_eq!(view.goal_progress_percent, 100.0);
    }

    #[test]
    fn quote_only_with_motivation() {
        let with = HomeView::new(&data(FocusCategory::Work, true, 4.0), &PlaceholderStats, "q");
        let without = HomeView::new(&data(FocusCategory::Work, false, 4.0), &PlaceholderStats, "q");
        assert_eq!(with.quote, Some("q"));
        assert_eq!(without.quote, None);
    }

    #[test]
    fn placeholder_stats_week_label() {
        let view = HomeView::new(&data(FocusCategory::Work, true, 4.0), &PlaceholderStats, "q");
        assert_eq!(view.stats.day_streak, 7);
        assert_eq!(view.stats.sessions, 18);
        assert_eq!(view.stats.week_label(), "42h 30m");
    }

    #[test]
    fn quote_pick_is_from_book() {
        let mut rng = rand_pcg::Pcg64::seed_from_u64(7);
        for _ in 0..20 {
            assert!(QuoteBook::QUOTES.contains(&QuoteBook::pick(&mut rng)));
        }
    }
}
