use clap::Parser;
use fit_config::FitConfig;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `fittrack` binary.
#[derive(Debug, Parser)]
#[command(
    name = "fittrack",
    version,
    about = "FitTrack - fitness records from free-form text lines"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw, text (defaults to `general.format`)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (errors only in logs)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract global flags, filling unset ones from configuration.
    #[must_use]
    pub fn global_flags(&self, config: &FitConfig) -> GlobalFlags {
        GlobalFlags {
            format: self.format.unwrap_or_else(|| config.general.format.into()),
            clock: config.general.clock,
        }
    }
}
