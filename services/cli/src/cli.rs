use crate::demo::{run_demo, run_journey, run_schedule, DemoArgs, JourneyArgs, ScheduleArgs};
use clap::{Parser, Subcommand};
use norel_with::config::AppConfig;
use norel_with::error::AppError;
use norel_with::telemetry;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "NOREL WITH",
    about = "Explore the NOREL WITH subscription journey and payment plan from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Walk the whole journey from login to the active phase (default command)
    Demo(DemoArgs),
    /// Replay a recorded JSON action script and print the resulting state
    Journey(JourneyArgs),
    /// Derive the payment schedule for a registration date
    Schedule(ScheduleArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(environment = ?config.environment, terms = ?config.schedule, "configuration loaded");

    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Demo(args) => run_demo(args, &config),
        Command::Journey(args) => run_journey(args),
        Command::Schedule(args) => run_schedule(args, &config),
    }
}
