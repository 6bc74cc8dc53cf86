//! # fiscal-cli: CLI Tool for Fiscal Identifiers
//!
//! Provides the `fiscal` command-line interface over `fiscal-core`.
//!
//! ## Subcommands
//!
//! - `fiscal tin check`: Validate TINs and describe them.
//! - `fiscal tin complete`: Append control digits to a TIN prefix.
//! - `fiscal sign parse`: Parse receipt fiscal signs.
//!
//! ```bash
//! fiscal tin check 2310031475 645393065232
//! fiscal --format json tin complete 231003147
//! fiscal sign parse 0396771107
//! ```
//!
//! Every input produces one report. Exit status is 0 when all inputs are
//! valid and 2 when any is rejected; 1 is reserved for operational failure.

pub mod sign;
pub mod tin;

use std::io::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

/// All inputs valid.
pub const EXIT_OK: u8 = 0;

/// At least one input rejected.
pub const EXIT_INVALID: u8 = 2;

/// How reports are written to stdout.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One human-readable line per input.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// A per-input result that can be rendered in either output format.
pub trait Report: Serialize {
    /// Whether the input was accepted.
    fn is_valid(&self) -> bool;

    /// Human-readable one-line rendering.
    fn text_line(&self) -> String;
}

/// Write reports and compute the exit code.
pub fn write_reports<R: Report>(
    reports: &[R],
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<u8> {
    for report in reports {
        let line = match format {
            OutputFormat::Text => report.text_line(),
            OutputFormat::Json => serde_json::to_string(report).context("serializing report")?,
        };
        writeln!(out, "{line}").context("writing report")?;
    }

    let rejected = reports.iter().filter(|r| !r.is_valid()).count();
    tracing::debug!(total = reports.len(), rejected, "reports written");

    Ok(if rejected == 0 { EXIT_OK } else { EXIT_INVALID })
}
