//! Command-line interface definitions and handlers.

use thiserror::Error;

use crate::api;
use crate::config::MissingSetting;

/// CLI argument parsing with clap.
pub mod args;

/// Subcommand implementations.
pub mod commands;

pub use args::{Args, Command, ExportArgs, ImportArgs};

/// A command line that cannot be acted on (missing flag, no matching files).
#[derive(Debug, Error)]
#[error("{0}")]
pub struct UsageError(pub String);

impl UsageError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Maps a command failure to a sysexits code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(api_err) = err.downcast_ref::<api::Error>() {
        return match api_err {
            api::Error::NotAllowed { .. } | api::Error::InvalidArgument { .. } => {
                exitcode::USAGE
            }
            api::Error::Io { .. } => exitcode::IOERR,
            api::Error::Transport(_) | api::Error::Decode(_) | api::Error::Api { .. } => {
                exitcode::UNAVAILABLE
            }
        };
    }
    if err.is::<UsageError>() || err.is::<MissingSetting>() {
        return exitcode::USAGE;
    }
    if err.is::<std::io::Error>() {
        return exitcode::IOERR;
    }
    exitcode::SOFTWARE
}
