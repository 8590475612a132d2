use chrono::NaiveDate;
use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Parse lines into records and print their summaries.
    Parse(ParseArgs),
    /// Show property schemas, aliases and JSON Schemas.
    Schema(SchemaArgs),
    /// Chat-style session over stdin: build a profile, log workouts.
    Session(SessionArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ParseArgs {
    /// Lines to parse. Reads stdin, one line per record, when omitted.
    pub lines: Vec<String>,

    /// Evaluate the workout date rule against this date (YYYY-MM-DD).
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Record kind to describe (e.g. Exercise). Lists all kinds when omitted.
    pub kind: Option<String>,

    /// Print a generated JSON Schema by name instead (e.g. record_summary).
    #[arg(long, value_name = "NAME", conflicts_with = "kind")]
    pub json: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SessionArgs {
    /// Profile store key. Defaults to `session.user_id` from config.
    #[arg(long)]
    pub user_id: Option<String>,

    /// Evaluate the workout date rule against this date (YYYY-MM-DD).
    #[arg(long)]
    pub today: Option<NaiveDate>,
}
