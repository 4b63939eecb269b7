use crate::commands::{run_estimate, run_import, run_rates, EstimateArgs, ImportArgs, RatesArgs};
use clap::{Parser, Subcommand};
use habit_impact::config::AppConfig;
use habit_impact::error::AppError;
use habit_impact::telemetry;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "habit-impact",
    about = "Estimate the environmental impact of sustainable habits",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate CO2, water and tree savings for a single action
    Estimate(EstimateArgs),
    /// Log every action in a CSV export and report per-user totals
    Import(ImportArgs),
    /// Print the active rate table as JSON
    Rates(RatesArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let estimator = config.impact.estimator()?;
    debug!(
        environment = ?config.environment,
        rate_table = %estimator.rates().version,
        "rate table loaded"
    );

    match cli.command {
        Command::Estimate(args) => run_estimate(&estimator, args),
        Command::Import(args) => run_import(estimator, args),
        Command::Rates(args) => run_rates(&estimator, args),
    }
}
