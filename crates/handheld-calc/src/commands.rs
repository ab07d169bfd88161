//! CLI command definitions using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{CalcConfig, Verbosity};
use crate::core::Limits;
use crate::error::{CliError, CliResult};

/// Handheld calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "handheld-calc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Maximum digits accepted while typing a number
    #[arg(
        long,
        global = true,
        default_value_t = Limits::DEFAULT_MAX_DIGITS,
        env = "HANDHELD_CALC_MAX_DIGITS"
    )]
    pub max_digits: usize,

    /// Write tracing output to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `tui`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Interactive terminal calculator
    Tui,

    /// Feed keys through the calculator and print the display
    Eval(EvalArgs),
}

/// Arguments for the eval command
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct EvalArgs {
    /// Keys to press, e.g. "12+30="; unknown characters are ignored
    pub keys: String,

    /// Print the whole calculator state as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// The subcommand to run, `tui` when none was given
    #[must_use]
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Tui)
    }

    /// Builds the runtime configuration from the parsed flags
    ///
    /// # Errors
    ///
    /// Returns [`CliError::InvalidArgument`] when `--max-digits` is zero.
    pub fn config(&self) -> CliResult<CalcConfig> {
        if self.max_digits == 0 {
            return Err(CliError::invalid_argument(
                "--max-digits must be at least 1",
            ));
        }

        let mut config = CalcConfig::new()
            .with_verbosity(Verbosity::from_flags(self.verbose, self.quiet))
            .with_max_digits(self.max_digits);
        if let Some(path) = &self.log_file {
            config = config.with_log_file(path);
        }
        Ok(config)
    }
}
