use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Convert dates to and from the iSeries day-offset format.
#[derive(Parser)]
#[command(
    name = "iseries-date",
    version,
    about = "Convert dates to and from the iSeries day-offset format"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the epoch date from config (YYYY-MM-DD or MM/DD/YYYY).
    #[arg(long, global = true)]
    pub epoch: Option<String>,

    /// Override the output format from config.
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Render dates as MM/DD/YYYY instead of YYYY-MM-DD.
    #[arg(long, global = true)]
    pub us: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the iSeries offset of a date.
    ToOffset(ToOffsetArgs),
    /// Print the date of an iSeries offset.
    FromOffset(FromOffsetArgs),
    /// Print today's date and offset.
    Today,
    /// Read dates or offsets from stdin, one per line, keeping both in sync.
    Interactive,
}

/// Arguments for the `to-offset` subcommand.
#[derive(clap::Args)]
pub struct ToOffsetArgs {
    /// Date as YYYY-MM-DD or MM/DD/YYYY.
    pub date: String,
}

/// Arguments for the `from-offset` subcommand.
#[derive(clap::Args)]
pub struct FromOffsetArgs {
    /// Day offset from the epoch; may be negative.
    #[arg(allow_negative_numbers = true)]
    pub offset: i64,
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
