//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Launcher for the lab dashboard.
///
/// Run without a subcommand to check for Node.js, install the dashboard's
/// dependencies on first use, and start its server.
#[derive(Parser)]
#[command(name = "labdash")]
#[command(about = "Start the lab dashboard server")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
