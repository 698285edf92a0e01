use clap::Subcommand;
use focusfi_core::FocusTimerEngine;

use super::Context;

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start a fresh timer and apply N one-second ticks, printing one JSON
    /// object per line
    Simulate {
        /// Focus length in seconds (default from config)
        #[arg(long)]
        focus_secs: Option<u64>,
        /// Break length in seconds (default from config)
        #[arg(long)]
        break_secs: Option<u64>,
        /// Number of ticks to apply
        #[arg(long, default_value = "0")]
        ticks: u64,
        /// Stop at the end of each phase instead of rolling into the next
        #[arg(long)]
        manual: bool,
    },
    /// Print the initial timer state as JSON
    Status,
}

pub fn run(action: TimerAction, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TimerAction::Simulate {
            focus_secs,
            break_secs,
            ticks,
            manual,
        } => {
            let mut config = ctx.timer_config(focus_secs, break_secs)?;
            if manual {
                config = config.with_auto_continue(false);
            }
            let mut engine = FocusTimerEngine::new(config);
            if let Some(event) = engine.start() {
                println!("{}", serde_json::to_string(&event)?);
            }
            for _ in 0..ticks {
                if let Some(event) = engine.tick() {
                    println!("{}", serde_json::to_string(&event)?);
                }
                println!("{}", serde_json::to_string(&engine.snapshot())?);
            }
        }
        TimerAction::Status => {
            let engine = FocusTimerEngine::new(ctx.timer_config(None, None)?);
            println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
        }
    }
    Ok(())
}
