use fit_config::FitConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, config: &FitConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Parse(args) => commands::parse::handle(&args, flags),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
        Commands::Session(args) => commands::session::handle(&args, config, flags),
    }
}
