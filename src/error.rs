//! Error kinds reported by the lookup tool.

use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// One or more required environment variables are unset or empty.
    #[error("missing configuration: {}", .0.join(", "))]
    ConfigMissing(Vec<&'static str>),

    #[error("invalid configuration {name}: {reason}")]
    ConfigInvalid { name: &'static str, reason: String },

    #[error("### Please specify an IP address or subnet as arguments. ###")]
    NoArguments,

    #[error("### Error: too many arguments given. ###")]
    TooManyArguments,

    #[error("### Error: not a valid IP address ###")]
    InvalidAddress(String),

    #[error("### Error: not a valid network address ###")]
    InvalidNetwork(String),

    /// WAPI answered with something other than 200.
    #[error("Status code {status} - {action} failed")]
    HttpStatus { status: u16, action: String },

    #[error("Request to {url} timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },

    #[error("Request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    #[error("Invalid response from {url}: path={path} error={reason}")]
    InvalidResponse {
        url: String,
        path: String,
        reason: String,
    },

    #[error("No network recorded for IP {0}")]
    NoNetworkForAddress(String),

    #[error("Error writing output: {0}")]
    Output(#[from] std::io::Error),
}

impl Error {
    /// Argument errors that are followed by the usage block.
    pub fn wants_usage(&self) -> bool {
        matches!(self, Error::NoArguments | Error::TooManyArguments)
    }

    /// Process exit status, calling without arguments only asks for usage.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::NoArguments => 0,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
