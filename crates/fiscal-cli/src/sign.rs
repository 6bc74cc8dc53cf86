//! # Fiscal Sign Subcommand
//!
//! - `parse`: Parse fiscal signs as printed on receipts and print their
//!   canonical form.

use std::io::Write;

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use fiscal_core::{FiscalSign, ValidationError};

use crate::{write_reports, OutputFormat, Report};

/// Arguments for the `fiscal sign` subcommand.
#[derive(Args, Debug)]
pub struct SignArgs {
    #[command(subcommand)]
    pub command: SignCommand,
}

/// Fiscal sign subcommands.
#[derive(Subcommand, Debug)]
pub enum SignCommand {
    /// Parse unsigned decimal fiscal signs.
    Parse {
        /// Fiscal signs as printed (leading zeros allowed).
        #[arg(required = true)]
        values: Vec<String>,
    },
}

/// Outcome for one fiscal sign input.
#[derive(Debug, Serialize)]
pub struct SignReport {
    pub input: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<FiscalSign>,
    /// Absent when the value does not fit the printed 32-bit field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub printable: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SignReport {
    /// Build a report from a parse result.
    pub fn new(input: &str, result: Result<FiscalSign, ValidationError>) -> Self {
        match result {
            Ok(sign) => Self {
                input: input.to_string(),
                valid: true,
                value: Some(sign),
                printable: sign.as_u32(),
                error_kind: None,
                error: None,
            },
            Err(e) => Self {
                input: input.to_string(),
                valid: false,
                value: None,
                printable: None,
                error_kind: Some(e.kind().to_string()),
                error: Some(e.to_string()),
            },
        }
    }
}

impl Report for SignReport {
    fn is_valid(&self) -> bool {
        self.valid
    }

    fn text_line(&self) -> String {
        match (self.value, &self.error) {
            (Some(sign), _) if self.printable.is_none() => {
                format!("OK: {sign} (exceeds 32-bit printed field)")
            }
            (Some(sign), _) => format!("OK: {sign}"),
            (None, Some(error)) => format!("INVALID: {}: {error}", self.input),
            (None, None) => format!("INVALID: {}", self.input),
        }
    }
}

/// Execute the `sign` subcommand.
pub fn run_sign(args: &SignArgs, format: OutputFormat, out: &mut dyn Write) -> Result<u8> {
    let reports: Vec<SignReport> = match &args.command {
        SignCommand::Parse { values } => values
            .iter()
            .map(|v| SignReport::new(v, FiscalSign::parse(v)))
            .collect(),
    };

    write_reports(&reports, format, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EXIT_INVALID, EXIT_OK};

    fn run(values: &[&str], format: OutputFormat) -> (u8, String) {
        let args = SignArgs {
            command: SignCommand::Parse {
                values: values.iter().map(|v| v.to_string()).collect(),
            },
        };
        let mut out = Vec::new();
        let code = run_sign(&args, format, &mut out).unwrap();
        (code, String::from_utf8(out).unwrap())
    }

    #[test]
    fn parse_strips_leading_zero() {
        let (code, text) = run(&["0396771107"], OutputFormat::Text);
        assert_eq!(code, EXIT_OK);
        assert_eq!(text, "OK: 396771107\n");
    }

    #[test]
    fn parse_flags_wide_values() {
        let (code, text) = run(&["4294967296"], OutputFormat::Text);
        assert_eq!(code, EXIT_OK);
        assert!(text.contains("exceeds 32-bit"));
    }

    #[test]
    fn parse_rejects_signed_input() {
        let (code, text) = run(&["1", "-1"], OutputFormat::Text);
        assert_eq!(code, EXIT_INVALID);
        assert!(text.lines().nth(1).unwrap().starts_with("INVALID: -1:"));
    }

    #[test]
    fn parse_json_report() {
        let (_, text) = run(&["0396771107"], OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(value["input"], "0396771107");
        assert_eq!(value["value"], 396_771_107_u64);
        assert_eq!(value["printable"], 396_771_107_u64);
        assert!(value.get("error").is_none());
    }
}
