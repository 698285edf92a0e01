use clap::Args;
use focusfi_core::{DailyHours, OnboardingWizard, WizardProgress};

#[derive(Args)]
pub struct OnboardArgs {
    /// Main focus: studying, work, fitness or general
    #[arg(long)]
    focus: Option<String>,
    /// Skip motivational content on the home screen
    #[arg(long)]
    no_motivation: bool,
    /// Daily focus goal in hours (1-12, half-hour steps)
    #[arg(long, default_value_t = DailyHours::DEFAULT)]
    hours: f64,
}

pub fn run(args: OnboardArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut wizard = OnboardingWizard::new();

    if let Some(focus) = &args.focus {
        wizard.set_focus_id(focus);
    }
    if wizard.advance() == WizardProgress::Blocked {
        return Err("a focus is required: --focus studying|work|fitness|general".into());
    }

    wizard.set_motivation(!args.no_motivation);
    wizard.advance();

    wizard.set_daily_hours(DailyHours::snap(args.hours));
    match wizard.advance() {
        WizardProgress::Completed(data) => {
            println!("{}", serde_json::to_string_pretty(&data)?);
            Ok(())
        }
        other => Err(format!("onboarding did not complete: {other:?}").into()),
    }
}
