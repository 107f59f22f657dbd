use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tally")]
#[command(
    author,
    version,
    about = "A CLI toolkit for crunching issue-tracker CSV exports"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose (DEBUG) logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Aggregate estimated hours from a CSV export on stdin
    #[command(visible_alias = "h")]
    Hours {
        /// Write the aggregated report as JSON to this path
        #[arg(long)]
        save_report: Option<PathBuf>,
    },

    /// Display a previously saved hours report
    Report {
        /// Path to a report JSON file
        path: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Sort identifiers read from stdin by which hand types them
    Hands,
}
