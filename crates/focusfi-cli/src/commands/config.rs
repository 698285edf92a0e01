use clap::Subcommand;

use super::Context;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Dot-separated key (e.g. "timer.focus_duration", "logging.filter")
        key: String,
    },
    /// List all config values
    List,
    /// Print the config file location
    Path,
}

pub fn run(action: ConfigAction, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => match ctx.config.get(&key) {
            Some(value) => println!("{value}"),
            None => return Err(format!("unknown key: {key}").into()),
        },
        ConfigAction::List => {
            let json = serde_json::to_string_pretty(&ctx.config)?;
            println!("{json}");
        }
        ConfigAction::Path => {
            println!("{}", ctx.config_path.display());
        }
    }
    Ok(())
}
