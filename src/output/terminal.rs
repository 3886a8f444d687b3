//! Terminal output of lookup results.

use crate::args::USAGE_MSG;
use crate::config::config_missing_message;
use crate::error::Error;
use colored::Colorize;
use serde_json::Value;
use std::io::{self, Write};

pub const IP_INFO_HEADER: &str = "IP info";
pub const NETWORK_INFO_HEADER: &str = "Network info";

/// Format a section header, e.g. `### IP info ###`.
pub fn format_header(title: &str) -> String {
    format!("### {title} ###")
}

/// Pretty-print a JSON value with two-space indentation.
pub fn format_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Write a header followed by its JSON result.
pub fn print_section<W: Write>(out: &mut W, title: &str, value: &Value) -> io::Result<()> {
    writeln!(out, "\n{}\n", format_header(title))?;
    writeln!(out, "{}", format_json(value))?;
    out.flush()
}

/// Write the message for `err`: setup instructions for missing configuration,
/// the usage block after argument errors, a red status line otherwise.
pub fn print_error<W: Write>(out: &mut W, err: &Error) -> io::Result<()> {
    match err {
        Error::ConfigMissing(_) => writeln!(out, "{}", config_missing_message())?,
        Error::NoArguments
        | Error::TooManyArguments
        | Error::InvalidAddress(_)
        | Error::InvalidNetwork(_) => {
            writeln!(out, "\n {err}")?;
            if err.wants_usage() {
                writeln!(out, "{USAGE_MSG}")?;
            }
        }
        _ => writeln!(out, "{}", err.to_string().red())?,
    }
    out.flush()
}
