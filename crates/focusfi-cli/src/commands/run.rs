use std::io;
use std::path::PathBuf;

use clap::Args;
use focusfi_core::AppShell;
use ratatui::prelude::*;

use super::Context;
use crate::{logging, tui};

#[derive(Args, Default)]
pub struct RunArgs {
    /// Focus length in minutes (default from config)
    #[arg(long)]
    focus_minutes: Option<u64>,
    /// Break length in minutes (default from config)
    #[arg(long)]
    break_minutes: Option<u64>,
    /// Append logs to this file; without it the UI logs nothing
    #[arg(long)]
    log_file: Option<PathBuf>,
}

pub fn run(args: RunArgs, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = &args.log_file {
        logging::init_file(&ctx.config.logging.filter, path)?;
    }
    let timer_config = ctx.timer_config(
        args.focus_minutes.map(|m| m.saturating_mul(60)),
        args.break_minutes.map(|m| m.saturating_mul(60)),
    )?;
    tracing::info!(
        focus_secs = timer_config.focus_duration_secs(),
        break_secs = timer_config.break_duration_secs(),
        "starting interactive ui"
    );

    let runtime = tokio::runtime::Runtime::new()?;
    let mut shell = AppShell::new(timer_config, runtime.handle().clone());

    tui::install_panic_hook();
    let guard = tui::TerminalGuard::enter(io::stdout())?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let result = tui::run_app(&mut terminal, &mut shell);

    drop(terminal);
    drop(guard);
    result?;
    Ok(())
}
