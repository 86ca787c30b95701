//! Diagnostic logging.
//!
//! Logs go to stderr through `tracing-subscriber`. The level comes from
//! `LOKALISE_LOG` (an `EnvFilter` directive) when set, otherwise from the
//! number of `-v` flags.

use tracing_subscriber::EnvFilter;

use crate::output;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "LOKALISE_LOG";

/// Filter directive for a `-v` count.
pub fn default_directive(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "error",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("lokalise_cli={level}")
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(!output::is_no_color())
        .try_init();
}
