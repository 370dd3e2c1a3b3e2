mod cli;
mod clipboard;
mod coach;
mod config;
mod engine;
mod store;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use engine::types::{DietPreference, EngineKind, PrimaryGoal};

#[derive(Parser)]
#[command(name = "titan", version, about = "Terminal habit tracker and AI coach")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create your profile and initialize the five engines
    Onboard(OnboardArgs),
    /// Show today's engines, readiness, and brief
    Dashboard,
    /// Flip an engine's completion for today
    Toggle {
        /// Which engine to toggle
        engine: EngineKind,
    },
    /// Show today's AI brief
    Brief {
        /// Regenerate even if today's brief is cached
        #[arg(long)]
        refresh: bool,
        /// Re-save the brief and copy it to the clipboard
        #[arg(long)]
        save: bool,
    },
    /// Talk to the Titan coach
    Chat,
    /// Evening check-in across all five engines
    Checkin {
        /// Free-form notes to attach to today's log
        #[arg(long)]
        notes: Option<String>,
    },
    /// View or update profile and notification settings
    Settings(SettingsArgs),
    /// Show tracker statistics
    Stats,
    /// Delete all tracker state
    Reset,
}

#[derive(Args)]
struct OnboardArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    age: u8,
    /// Body weight in kilograms
    #[arg(long)]
    weight: Option<f32>,
    /// Height in centimeters
    #[arg(long)]
    height: Option<f32>,
    #[arg(long, value_enum)]
    diet: DietPreference,
    #[arg(long, value_enum)]
    goal: PrimaryGoal,
    /// Wake-up time as HH:MM
    #[arg(long, default_value = "06:00")]
    wake_up: String,
    /// Accept the disclaimer without the interactive prompt
    #[arg(long)]
    accept_risks: bool,
}

#[derive(Args)]
struct SettingsArgs {
    #[arg(long, value_enum)]
    goal: Option<PrimaryGoal>,
    #[arg(long, value_enum)]
    diet: Option<DietPreference>,
    /// Wake-up time as HH:MM
    #[arg(long)]
    wake_up: Option<String>,
    #[arg(long)]
    daily_check_in: Option<bool>,
    #[arg(long)]
    morning_brief: Option<bool>,
    #[arg(long)]
    workout_reminders: Option<bool>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config (for log level)
    let config = config::TitanConfig::load()?;

    // Initialize tracing with the configured log level.
    // Log to stderr so stdout stays clean for command output.
    let filter = EnvFilter::try_new(&config.app.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Onboard(args) => cli::onboard::onboard(
            &config,
            args.name,
            args.age,
            args.weight,
            args.height,
            args.diet,
            args.goal,
            args.wake_up,
            args.accept_risks,
        )?,
        Command::Dashboard => cli::dashboard::dashboard(&config).await?,
        Command::Toggle { engine } => cli::toggle::toggle(&config, engine)?,
        Command::Brief { refresh, save } => cli::brief::brief(&config, refresh, save).await?,
        Command::Chat => cli::chat::chat(&config).await?,
        Command::Checkin { notes } => cli::checkin::checkin(&config, notes)?,
        Command::Settings(args) => cli::settings::settings(
            &config,
            cli::settings::SettingsUpdate {
                goal: args.goal,
                diet: args.diet,
                wake_up: args.wake_up,
                daily_check_in: args.daily_check_in,
                morning_brief: args.morning_brief,
                workout_reminders: args.workout_reminders,
            },
        )?,
        Command::Stats => cli::stats::stats(&config)?,
        Command::Reset => cli::reset::reset(&config)?,
    }

    Ok(())
}
