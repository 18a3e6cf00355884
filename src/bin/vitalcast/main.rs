// ABOUTME: vitalcast CLI - scores a lifestyle profile and optionally narrates the forecast
// ABOUTME: Subcommands print metrics, what-if scenarios, the narrator prompt, or a full prediction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Deterministic metrics for a profile file
//! vitalcast metrics --profile profile.json
//!
//! # What-if scenarios, reading the profile from stdin
//! cat profile.json | vitalcast scenarios --profile -
//!
//! # Full prediction (set GEMINI_API_KEY or VITALCAST_LLM_PROVIDER=none)
//! vitalcast predict --profile profile.json --compact
//!
//! # Inspect the prompt that would be sent
//! vitalcast prompt --profile profile.json
//! ```

mod commands;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;
use vitalcast::config::LogLevel;
use vitalcast::errors::{AppError, ErrorResponse};
use vitalcast::logging::LoggingConfig;

#[derive(Parser)]
#[command(
    name = "vitalcast",
    version,
    about = "Lifestyle risk metrics with an AI narrative",
    long_about = "Scores a lifestyle profile with deterministic screening proxies (FINDRISC, \
                  cardiovascular proxy, Life's Essential 8) and optionally asks a language \
                  model to narrate the result."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print single-line JSON
    #[arg(long, global = true)]
    compact: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Validate a profile and print its derived metrics
    Metrics {
        /// Profile JSON file, or `-` for stdin
        #[arg(long, short = 'p')]
        profile: String,
    },

    /// Print the standard what-if scenarios for a profile
    Scenarios {
        /// Profile JSON file, or `-` for stdin
        #[arg(long, short = 'p')]
        profile: String,
    },

    /// Compute metrics and ask the configured model to narrate them
    Predict {
        /// Profile JSON file, or `-` for stdin
        #[arg(long, short = 'p')]
        profile: String,
    },

    /// Print the prompt that `predict` would send
    Prompt {
        /// Profile JSON file, or `-` for stdin
        #[arg(long, short = 'p')]
        profile: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level(LogLevel::Debug);
    }
    if let Err(e) = logging.init() {
        eprintln!("warning: logging disabled: {e:#}");
    }

    let result = match cli.command {
        Command::Metrics { profile } => commands::metrics(&profile, cli.compact).await,
        Command::Scenarios { profile } => commands::scenarios(&profile, cli.compact).await,
        Command::Predict { profile } => commands::predict(&profile, cli.compact).await,
        Command::Prompt { profile } => commands::prompt(&profile).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_failure(e),
    }
}

/// Print the error as JSON on stderr and map it to a sysexits-style code
fn report_failure(error: AppError) -> ExitCode {
    error!(code = ?error.code, "{}", error.message);
    let exit_code = u8::try_from(error.exit_code()).unwrap_or(1);

    let response = ErrorResponse::from(error);
    match serde_json::to_string_pretty(&response) {
        Ok(json) => eprintln!("{json}"),
        Err(_) => eprintln!("{}", response.error.message),
    }

    ExitCode::from(exit_code)
}
