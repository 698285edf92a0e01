use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;
mod logging;
mod tui;

#[derive(Parser)]
#[command(name = "focusfi", version, about = "FocusFi focus timer")]
struct Cli {
    /// Config file (default: ~/.config/focusfi/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive terminal app (default)
    Run(commands::run::RunArgs),
    /// Headless timer driver
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Run the onboarding wizard without the UI
    Onboard(commands::onboard::OnboardArgs),
    /// Configuration inspection
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = commands::Context::load(cli.config).and_then(|ctx| {
        match cli.command.unwrap_or_else(|| Commands::Run(Default::default())) {
            Commands::Run(args) => commands::run::run(args, &ctx),
            Commands::Timer { action } => {
                logging::init_stderr(&ctx.config.logging.filter)?;
                commands::timer::run(action, &ctx)
            }
            Commands::Onboard(args) => {
                logging::init_stderr(&ctx.config.logging.filter)?;
                commands::onboard::run(args)
            }
            Commands::Config { action } => commands::config::run(action, &ctx),
        }
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
