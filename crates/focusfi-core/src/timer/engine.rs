//! Focus/break countdown engine.
//!
//! The engine is a pure state machine with no clock of its own. The caller
//! delivers exactly one `tick()` per elapsed second while the timer runs;
//! see [`FocusTimer`](super::FocusTimer) for the adapter that does this.
//!
//! ## Phase cycle
//!
//! ```text
//! Focus(F..0) -> Break(B..0) -> Focus(F..0) -> ...
//! ```
//!
//! The transition is applied on the tick that brings the countdown to zero,
//! so the next phase's countdown starts with the following tick.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = FocusTimerEngine::new(TimerConfig::default());
//! engine.start();
//! // Once per second:
//! engine.tick(); // Returns Some(Event::PhaseCompleted) on a transition
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::config::{Phase, TimerConfig};
use crate::events::Event;

/// Observable timer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub phase: Phase,
    pub remaining_seconds: u64,
    pub running: bool,
    /// Completed focus countdowns. Never decreases, not even on reset.
    pub completed_focus_sessions: u32,
}

/// Core countdown engine.
#[derive(Debug, Clone)]
pub struct FocusTimerEngine {
    config: TimerConfig,
    state: TimerState,
}

impl FocusTimerEngine {
    /// Create a stopped engine at the start of a focus phase.
    pub fn new(config: TimerConfig) -> Self {
        Self {
            state: TimerState {
                phase: Phase::Focus,
                remaining_seconds: config.focus_duration_secs(),
                running: false,
                completed_focus_sessions: 0,
            },
            config,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.state.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn completed_focus_sessions(&self) -> u32 {
        self.state.completed_focus_sessions
    }

    /// Configured duration of the current phase.
    pub fn total_seconds(&self) -> u64 {
        self.config.duration_secs(self.state.phase)
    }

    /// 0.0 .. 100.0 progress within the current phase.
    pub fn progress_percent(&self) -> f64 {
        let total = self.total_seconds();
        if total == 0 {
            return 0.0;
        }
        let elapsed = total.saturating_sub(self.state.remaining_seconds);
        (elapsed as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
    }

    /// True while the current phase has not been counted down at all.
    /// The primary control reads "Start" in this case and "Resume" otherwise.
    pub fn is_fresh(&self) -> bool {
        self.state.remaining_seconds == self.total_seconds()
    }

    /// 1-based number of the focus session in progress.
    pub fn current_session_number(&self) -> u32 {
        self.state.completed_focus_sessions.saturating_add(1)
    }

    /// Minutes of completed focus time.
    pub fn focused_minutes(&self) -> u64 {
        (self.state.completed_focus_sessions as u64)
            .saturating_mul(self.config.focus_duration_secs())
            / 60
    }

    /// Remaining time as `MM:SS`.
    pub fn formatted_remaining(&self) -> String {
        format_mm_ss(self.state.remaining_seconds)
    }

    /// Banner shown under the timer, if any.
    pub fn status_message(&self) -> Option<&'static str> {
        match (self.state.phase, self.state.running) {
            (Phase::Focus, true) => Some("You're in the zone! Stay focused and crush your goals."),
            (Phase::Break, _) => {
                Some("Great work! Take a breather and recharge for the next session.")
            }
            (Phase::Focus, false) => None,
        }
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            phase: self.state.phase,
            remaining_seconds: self.state.remaining_seconds,
            total_seconds: self.total_seconds(),
            running: self.state.running,
            completed_focus_sessions: self.state.completed_focus_sessions,
            progress_percent: self.progress_percent(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        if self.state.running {
            return None;
        }
        self.state.running = true;
        tracing::debug!(phase = ?self.state.phase, remaining = self.state.remaining_seconds, "timer started");
        Some(Event::TimerStarted {
            phase: self.state.phase,
            remaining_seconds: self.state.remaining_seconds,
            at: Utc::now(),
        })
    }

    pub fn pause(&mut self) -> Option<Event> {
        if !self.state.running {
            return None;
        }
        self.state.running = false;
        tracing::debug!(remaining = self.state.remaining_seconds, "timer paused");
        Some(Event::TimerPaused {
            remaining_seconds: self.state.remaining_seconds,
            at: Utc::now(),
        })
    }

    /// Back to a stopped, full-length focus phase. The session counter is kept.
    pub fn reset(&mut self) -> Option<Event> {
        self.state.running = false;
        self.state.phase = Phase::Focus;
        self.state.remaining_seconds = self.config.focus_duration_secs();
        tracing::debug!("timer reset");
        Some(Event::TimerReset {
            completed_focus_sessions: self.state.completed_focus_sessions,
            at: Utc::now(),
        })
    }

    /// Advance by one second. Returns `Some(Event::PhaseCompleted)` when the
    /// countdown reaches zero and the phase switches.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.state.running {
            return None;
        }
        self.state.remaining_seconds = self.state.remaining_seconds.saturating_sub(1);
        if self.state.remaining_seconds > 0 {
            return None;
        }
        Some(self.transition())
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn transition(&mut self) -> Event {
        let completed = self.state.phase;
        if completed == Phase::Focus {
            self.state.completed_focus_sessions =
                self.state.completed_focus_sessions.saturating_add(1);
        }
        let next = completed.next();
        self.state.phase = next;
        self.state.remaining_seconds = self.config.duration_secs(next);
        if !self.config.auto_continue() {
            self.state.running = false;
        }
        tracing::info!(
            completed = ?completed,
            next = ?next,
            sessions = self.state.completed_focus_sessions,
            "phase completed"
        );
        Event::PhaseCompleted {
            completed,
            next,
            completed_focus_sessions: self.state.completed_focus_sessions,
            next_duration_seconds: self.state.remaining_seconds,
            at: Utc::now(),
        }
    }
}

impl Default for FocusTimerEngine {
    fn default() -> Self {
        Self::new(TimerConfig::default())
    }
}

/// Format seconds as zero-padded `MM:SS`. Minutes are not wrapped at 60.
pub fn format_mm_ss(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(focus: u64, brk: u64) -> FocusTimerEngine {
        FocusTimerEngine::new(TimerConfig::new(focus, brk).unwrap())
    }

    #[test]
    fn new_engine_is_stopped_at_full_focus() {
        let e = FocusTimerEngine::default();
        let s = e.state();
        assert_eq!(s.phase, Phase::Focus);
        assert_eq!(s.remaining_seconds, 1500);
        assert!(!s.running);
        assert_eq!(s.completed_focus_sessions, 0);
        assert!(e.is_fresh());
        assert_eq!(e.formatted_remaining(), "25:00");
    }

    #[test]
    fn start_pause_are_idempotent() {
        let mut e = engine(10, 5);
        assert!(e.start().is_some());
        assert!(e.start().is_none());
        assert!(e.is_running());

        assert!(e.pause().is_some());
        assert!(e.pause().is_none());
        assert!(!e.is_running());
    }

    #[test]
    fn tick_counts_down_and_transitions_at_zero() {
        let mut e = engine(2, 1);
        e.start();
        assert!(e.tick().is_none());
        assert_eq!(e.remaining_seconds(), 1);

        match e.tick() {
            Some(Event::PhaseCompleted {
                completed,
                next,
                completed_focus_sessions,
                next_duration_seconds,
                ..
            }) => {
                assert_eq!(completed, Phase::Focus);
                assert_eq!(next, Phase::Break);
                assert_eq!(completed_focus_sessions, 1);
                assert_eq!(next_duration_seconds, 1);
            }
            other => panic!("Expected PhaseCompleted, got {:?}", other),
        }
        assert_eq!(e.phase(), Phase::Break);
        assert!(e.is_running());
    }

    #[test]
    fn break_to_focus_does_not_count_a_session() {
        let mut e = engine(1, 1);
        e.start();
        e.tick();
        assert_eq!(e.completed_focus_sessions(), 1);
        e.tick();
        assert_eq!(e.phase(), Phase::Focus);
        assert_eq!(e.completed_focus_sessions(), 1);
    }

    #[test]
    fn tick_while_paused_changes_nothing() {
        let mut e = engine(3, 1);
        let before = e.state();
        assert!(e.tick().is_none());
        assert_eq!(e.state(), before);
    }

    #[test]
    fn reset_keeps_session_counter() {
        let mut e = engine(1, 5);
        e.start();
        e.tick();
        e.tick();
        assert_eq!(e.phase(), Phase::Break);

        e.reset();
        let s = e.state();
        assert_eq!(s.phase, Phase::Focus);
        assert_eq!(s.remaining_seconds, 1);
        assert!(!s.running);
        assert_eq!(s.completed_focus_sessions, 1);
    }

    #[test]
    fn manual_mode_stops_on_transition() {
        let config = TimerConfig::new(1, 1).unwrap().with_auto_continue(false);
        let mut e = FocusTimerEngine::new(config);
        e.start();
        assert!(e.tick().is_some());
        assert_eq!(e.phase(), Phase::Break);
        assert!(!e.is_running());
        assert!(e.tick().is_none());
        assert_eq!(e.remaining_seconds(), 1);
    }

    #[test]
    fn progress_tracks_elapsed_fraction() {
        let mut e = engine(4, 2);
        assert_eq!(e.progress_percent(), 0.0);
        e.start();
        e.tick();
        assert_eq!(e.progress_percent(), 25.0);
        e.tick();
        e.tick();
        assert_eq!(e.progress_percent(), 75.0);
        e.tick();
        // New phase starts from zero.
        assert_eq!(e.progress_percent(), 0.0);
        assert!(e.is_fresh());
    }

    #[test]
    fn derived_session_counters() {
        let mut e = engine(120, 1);
        assert_eq!(e.current_session_number(), 1);
        e.start();
        for _ in 0..120 {
            e.tick();
        }
        assert_eq!(e.current_session_number(), 2);
        assert_eq!(e.focused_minutes(), 2);
    }

    #[test]
    fn status_message_follows_phase() {
        let mut e = engine(1, 3);
        assert!(e.status_message().is_none());
        e.start();
        assert!(e.status_message().unwrap().contains("zone"));
        e.tick();
        assert!(e.status_message().unwrap().contains("breather"));
    }

    #[test]
    fn format_mm_ss_pads_and_does_not_wrap() {
        assert_eq!(format_mm_ss(0), "00:00");
        assert_eq!(format_mm_ss(65), "01:05");
        assert_eq!(format_mm_ss(3600), "60:00");
    }

    #[test]
    fn snapshot_returns_valid_event() {
        let e = FocusTimerEngine::default();
        match e.snapshot() {
            Event::StateSnapshot {
                phase,
                remaining_seconds,
                total_seconds,
                running,
                ..
            } => {
                assert_eq!(phase, Phase::Focus);
                assert_eq!(remaining_seconds, 25 * 60);
                assert_eq!(total_seconds, 25 * 60);
                assert!(!running);
            }
            _ => panic!("Expected StateSnapshot"),
        }
    }
}
