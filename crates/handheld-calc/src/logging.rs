//! Tracing subscriber setup
//!
//! The terminal UI owns stdout and stderr, so in that mode log lines go to
//! `--log-file` or nowhere. `eval` logs to stderr unless a file is given.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing::level_filters::LevelFilter;
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;

use crate::config::CalcConfig;
use crate::error::{CliError, CliResult};

/// Where log output may go when no log file is configured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    /// Standard error
    Stderr,
    /// Discard everything
    Silent,
}

/// Installs the global subscriber for this process
///
/// # Errors
///
/// Fails when `RUST_LOG` holds an invalid directive, the log file cannot be
/// opened, or a subscriber is already installed.
pub fn init(config: &CalcConfig, fallback: LogSink) -> CliResult<()> {
    let filter = build_filter(config)?;

    let result = match (&config.log_file, fallback) {
        (Some(path), _) => {
            let file = open_log_file(path)?;
            tracing::subscriber::set_global_default(file_subscriber(filter, file))
        }
        (None, LogSink::Stderr) => tracing::subscriber::set_global_default(
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .with_target(false)
                .finish(),
        ),
        (None, LogSink::Silent) => return Ok(()),
    };

    result.map_err(|e| CliError::logging(e.to_string()))
}

/// Level filter from the verbosity, overridden by `RUST_LOG`
///
/// # Errors
///
/// Returns [`CliError::Config`] when `RUST_LOG` cannot be parsed.
pub fn build_filter(config: &CalcConfig) -> CliResult<EnvFilter> {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(config.verbosity.level()).into())
        .from_env()
        .map_err(|e| CliError::config(format!("invalid RUST_LOG: {e}")))
}

/// Opens `path` for appending, creating it when missing
///
/// # Errors
///
/// Returns [`CliError::Io`] when the file cannot be opened.
pub fn open_log_file(path: &Path) -> CliResult<File> {
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

/// Plain-text subscriber writing to `file`
pub fn file_subscriber(filter: EnvFilter, file: File) -> impl Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .finish()
}
