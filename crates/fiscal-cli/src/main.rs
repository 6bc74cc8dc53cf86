//! # fiscal CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fiscal_cli::sign::{run_sign, SignArgs};
use fiscal_cli::tin::{run_tin, TinArgs};
use fiscal_cli::OutputFormat;

/// Fiscal identifier toolkit.
///
/// Validates Russian taxpayer identification numbers, computes their control
/// digits, and parses receipt fiscal signs.
#[derive(Parser, Debug)]
#[command(name = "fiscal", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Taxpayer identification number (INN) validation and completion.
    Tin(TinArgs),

    /// Fiscal sign parsing.
    Sign(SignArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(format = ?cli.format, "fiscal CLI starting");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match &cli.command {
        Commands::Tin(args) => run_tin(args, cli.format, &mut out),
        Commands::Sign(args) => run_sign(args, cli.format, &mut out),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
