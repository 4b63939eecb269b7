mod cli;
mod commands;
mod infra;

use habit_impact::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
