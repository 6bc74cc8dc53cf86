//! # TIN Subcommand
//!
//! - `check`: Validate one or more TINs.
//! - `complete`: Compute the control digit(s) for a 9- or 10-digit prefix.

use std::io::Write;

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use fiscal_core::{Tin, TinKind, ValidationError};

use crate::{write_reports, OutputFormat, Report};

/// Arguments for the `fiscal tin` subcommand.
#[derive(Args, Debug)]
pub struct TinArgs {
    #[command(subcommand)]
    pub command: TinCommand,
}

/// TIN subcommands.
#[derive(Subcommand, Debug)]
pub enum TinCommand {
    /// Validate TINs (10 digits for organizations, 12 for individuals).
    Check {
        /// TINs to validate.
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Append control digits to a prefix (9 digits -> 10, 10 digits -> 12).
    Complete {
        /// TIN without its control digit(s).
        prefix: String,
    },
}

/// Outcome for one TIN input.
#[derive(Debug, Serialize)]
pub struct TinReport {
    pub input: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tin: Option<Tin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<TinKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_office_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreign_organization: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TinReport {
    /// Build a report from a construction result.
    pub fn new(input: &str, result: Result<Tin, ValidationError>) -> Self {
        match result {
            Ok(tin) => Self {
                input: input.to_string(),
                valid: true,
                kind: Some(tin.kind()),
                region_code: Some(tin.region_code().to_string()),
                tax_office_code: Some(tin.tax_office_code().to_string()),
                foreign_organization: Some(tin.is_foreign_organization()),
                tin: Some(tin),
                error_kind: None,
                error: None,
            },
            Err(e) => Self {
                input: input.to_string(),
                valid: false,
                tin: None,
                kind: None,
                region_code: None,
                tax_office_code: None,
                foreign_organization: None,
                error_kind: Some(e.kind().to_string()),
                error: Some(e.to_string()),
            },
        }
    }
}

impl Report for TinReport {
    fn is_valid(&self) -> bool {
        self.valid
    }

    fn text_line(&self) -> String {
        match (&self.tin, &self.error) {
            (Some(tin), _) => {
                let mut line = format!(
                    "OK: {tin} {} region={} office={}",
                    tin.kind(),
                    tin.region_code(),
                    tin.tax_office_code()
                );
                if tin.is_foreign_organization() {
                    line.push_str(" foreign");
                }
                line
            }
            (None, Some(error)) => format!("INVALID: {}: {error}", self.input),
            (None, None) => format!("INVALID: {}", self.input),
        }
    }
}

/// Execute the `tin` subcommand.
pub fn run_tin(args: &TinArgs, format: OutputFormat, out: &mut dyn Write) -> Result<u8> {
    let reports: Vec<TinReport> = match &args.command {
        TinCommand::Check { values } => values
            .iter()
            .map(|v| TinReport::new(v, Tin::new(v.as_str())))
            .collect(),
        TinCommand::Complete { prefix } => vec![TinReport::new(prefix, Tin::complete(prefix))],
    };

    write_reports(&reports, format, out)
}
