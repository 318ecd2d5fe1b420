// ABOUTME: Barometer CLI - runs symptom/weather correlation analysis over JSON snapshots
// ABOUTME: Prints a text report or JSON; logs go to stderr so stdout stays machine-readable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barometer Contributors
//!
//! Usage:
//! ```bash
//! # Analyse the last 90 days
//! barometer-cli analyze --weather weather.json --symptoms symptoms.json
//!
//! # Reproducible run anchored on a fixed day, as JSON
//! barometer-cli analyze --weather weather.json --symptoms symptoms.json \
//!     --today 2025-09-30 --window-days 120 --format json
//!
//! # Inspect the assembled daily data points
//! barometer-cli features --weather weather.json --symptoms symptoms.json --window-days 14
//! ```

mod commands;

use anyhow::Result;
use barometer::errors::AppError;
use barometer::logging::LoggingConfig;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "barometer-cli",
    about = "Symptom diary weather correlation analysis",
    long_about = "Correlates daily weather with symptom occurrence and explains the relationships."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Run the correlation analysis and print the result
    Analyze {
        #[command(flatten)]
        input: InputArgs,

        /// Output format
        #[arg(long, default_value = "pretty", value_parser = ["pretty", "json"])]
        format: String,
    },

    /// Print the assembled daily data points without correlating
    Features {
        #[command(flatten)]
        input: InputArgs,

        /// Output format
        #[arg(long, default_value = "pretty", value_parser = ["pretty", "json"])]
        format: String,
    },
}

/// Snapshot locations and window selection shared by every subcommand
#[derive(Args)]
struct InputArgs {
    /// JSON array of daily weather observations
    #[arg(long)]
    weather: PathBuf,

    /// JSON array of symptom records
    #[arg(long)]
    symptoms: PathBuf,

    /// Trailing window length in days (overrides BAROMETER_WINDOW_DAYS)
    #[arg(long)]
    window_days: Option<u32>,

    /// Last day of the window, YYYY-MM-DD (defaults to today, UTC)
    #[arg(long)]
    today: Option<NaiveDate>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error:#}");
            let code = error
                .downcast_ref::<AppError>()
                .map_or(1, |app_error| app_error.code.exit_code());
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    match cli.command {
        Command::Analyze { input, format } => commands::analyze::run(&input, &format),
        Command::Features { input, format } => commands::features::run(&input, &format),
    }
}
