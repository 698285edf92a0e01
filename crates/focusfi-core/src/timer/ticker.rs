//! Periodic tick source for the focus timer.
//!
//! [`FocusTimerEngine`] has no clock. [`FocusTimer`] pairs it with a
//! [`TickHandle`]: a tokio task that emits one tick per second into a channel.
//! The handle exists only while the engine runs and aborts its task when
//! dropped, so pausing, resetting, or dropping the timer stops all ticks.
//!
//! Ticks are applied on the owner's thread via [`FocusTimer::pump`], never
//! from the tick task itself.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::config::TimerConfig;
use super::engine::FocusTimerEngine;
use crate::events::Event;

/// One logical second.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick;

/// A live periodic tick source. Dropping it cancels the task.
#[derive(Debug)]
pub struct TickHandle {
    task: JoinHandle<()>,
    ticks: mpsc::UnboundedReceiver<Tick>,
}

impl TickHandle {
    /// Spawn a tick task on `runtime`. The first tick arrives one `period` from now.
    pub fn spawn(runtime: &Handle, period: Duration) -> Self {
        let (tx, ticks) = mpsc::unbounded_channel();
        let task = runtime.spawn(async move {
            let first = tokio::time::Instant::now() + period;
            let mut interval = tokio::time::interval_at(first, period);
            loop {
                interval.tick().await;
                if tx.send(Tick).is_err() {
                    break;
                }
            }
        });
        Self { task, ticks }
    }

    /// Next pending tick, without waiting.
    pub fn try_next(&mut self) -> Option<Tick> {
        self.ticks.try_recv().ok()
    }
}

impl Drop for TickHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Focus timer engine driven by a real one-second clock.
#[derive(Debug)]
pub struct FocusTimer {
    engine: FocusTimerEngine,
    runtime: Handle,
    ticker: Option<TickHandle>,
}

impl FocusTimer {
    pub fn new(config: TimerConfig, runtime: Handle) -> Self {
        Self {
            engine: FocusTimerEngine::new(config),
            runtime,
            ticker: None,
        }
    }

    pub fn engine(&self) -> &FocusTimerEngine {
        &self.engine
    }

    /// Whether a tick source is currently alive.
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn snapshot(&self) -> Event {
        self.engine.snapshot()
    }

    pub fn start(&mut self) -> Option<Event> {
        let event = self.engine.start();
        if self.engine.is_running() && self.ticker.is_none() {
            self.ticker = Some(TickHandle::spawn(&self.runtime, TICK_PERIOD));
        }
        event
    }

    pub fn pause(&mut self) -> Option<Event> {
        let event = self.engine.pause();
        self.release();
        event
    }

    pub fn reset(&mut self) -> Option<Event> {
        let event = self.engine.reset();
        self.release();
        event
    }

    /// Start when stopped, pause when running.
    pub fn toggle(&mut self) -> Option<Event> {
        if self.engine.is_running() {
            self.pause()
        } else {
            self.start()
        }
    }

    /// Apply every tick delivered since the last call, in order.
    /// Returns the phase transitions they caused.
    pub fn pump(&mut self) -> Vec<Event> {
        let mut events = Vec::new();
        while let Some(ticker) = self.ticker.as_mut() {
            let Some(Tick) = ticker.try_next() else {
                break;
            };
            if let Some(event) = self.engine.tick() {
                events.push(event);
            }
            if !self.engine.is_running() {
                // Transition stopped the engine (auto_continue = false).
                self.release();
            }
        }
        events
    }

    fn release(&mut self) {
        if self.ticker.take().is_some() {
            tracing::debug!("tick source released");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::Phase;

    fn timer(focus: u64, brk: u64) -> FocusTimer {
        FocusTimer::new(TimerConfig::new(focus, brk).unwrap(), Handle::current())
    }

    async fn sleep_ms(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn one_tick_per_second_while_running() {
        let mut t = timer(10, 5);
        t.start();
        sleep_ms(3_500).await;
        t.pump();
        assert_eq!(t.engine().remaining_seconds(), 7);
    }

    #[tokio::test(start_paused = true)]
    async fn pump_reports_transitions() {
        let mut t = timer(2, 1);
        t.start();
        sleep_ms(2_500).await;
        let events = t.pump();
        assert_eq!(events.len(), 1);
        assert_eq!(t.engine().phase(), Phase::Break);
        assert_eq!(t.engine().completed_focus_sessions(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn no_ticks_after_pause() {
        let mut t = timer(10, 5);
        t.start();
        sleep_ms(2_500).await;
        t.pause();
        assert!(!t.is_ticking());
        sleep_ms(5_000).await;
        t.pump();
        assert_eq!(t.engine().remaining_seconds(), 10);
    }

    #[tokio::test(start_paused = true)]
    async fn stale_ticks_are_discarded_on_pause() {
        let mut t = timer(10, 5);
        t.start();
        // Ticks are queued but not yet pumped.
        sleep_ms(3_500).await;
        t.pause();
        t.start();
        t.pump();
        assert_eq!(t.engine().remaining_seconds(), 10);
    }

    #[tokio::test(start_paused = true)]
    async fn reset_releases_tick_source() {
        let mut t = timer(10, 5);
        t.start();
        sleep_ms(1_500).await;
        t.pump();
        t.reset();
        assert!(!t.is_ticking());
        sleep_ms(3_000).await;
        t.pump();
        assert_eq!(t.engine().remaining_seconds(), 10);
        assert!(!t.engine().is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_timer_cancels_task() {
        let mut t = timer(10, 5);
        t.start();
        let abort = t.ticker.as_ref().unwrap().task.abort_handle();
        assert!(!abort.is_finished());
        drop(t);
        sleep_ms(1_500).await;
        assert!(abort.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn pause_cancels_task() {
        let mut t = timer(10, 5);
        t.start();
        let abort = t.ticker.as_ref().unwrap().task.abort_handle();
        t.pause();
        sleep_ms(1_500).await;
        assert!(abort.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn manual_mode_releases_on_transition() {
        let config = TimerConfig::new(1, 3).unwrap().with_auto_continue(false);
        let mut t = FocusTimer::new(config, Handle::current());
        t.start();
        sleep_ms(2_500).await;
        let events = t.pump();
        assert_eq!(events.len(), 1);
        assert!(!t.is_ticking());
        assert_eq!(t.engine().phase(), Phase::Break);
        assert_eq!(t.engine().remaining_seconds(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn toggle_flips_running() {
        let mut t = timer(10, 5);
        assert!(t.toggle().is_some());
        assert!(t.is_ticking());
        assert!(t.toggle().is_some());
        assert!(!t.is_ticking());
    }

    #[tokio::test(start_paused = true)]
    async fn tick_handle_queues_one_tick_per_period() {
        let mut handle = TickHandle::spawn(&Handle::current(), TICK_PERIOD);
        assert!(handle.try_next().is_none());
        sleep_ms(2_500).await;
        assert_eq!(handle.try_next(), Some(Tick));
        assert_eq!(handle.try_next(), Some(Tick));
        assert!(handle.try_next().is_none());
    }
}
