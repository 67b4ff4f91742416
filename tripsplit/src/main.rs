#![warn(clippy::uninlined_format_args)]

mod bootstrap;
mod cli;
mod commands;

use clap::Parser;
use std::{error::Error, io, process::ExitCode};

fn main() -> ExitCode {
    bootstrap::init_logging();

    let cli = cli::Cli::parse();
    let config = bootstrap::AppConfig::from_env();

    let stdout = io::stdout();
    match commands::run_command(cli, config, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "Command failed");
            eprintln!("Error: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
