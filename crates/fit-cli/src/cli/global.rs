use clap::ValueEnum;
use fit_config::DefaultFormat;
use fit_core::Clock;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Raw,
    Text,
}

impl From<DefaultFormat> for OutputFormat {
    fn from(format: DefaultFormat) -> Self {
        match format {
            DefaultFormat::Json => Self::Json,
            DefaultFormat::Raw => Self::Raw,
            DefaultFormat::Text => Self::Text,
        }
    }
}

/// Global flags resolved against configuration.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub clock: Clock,
}
