mod config;
mod engine;
mod ticker;

pub use config::{Phase, TimerConfig};
pub use engine::{format_mm_ss, FocusTimerEngine, TimerState};
pub use ticker::{FocusTimer, Tick, TickHandle, TICK_PERIOD};
