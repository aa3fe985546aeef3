mod cli;
mod demo;
mod infra;

use norel_with::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
