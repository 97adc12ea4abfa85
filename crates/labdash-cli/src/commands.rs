//! Subcommands.

use clap::Subcommand;

/// Available commands. Running with none is the same as `start`.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Check for Node.js, install dependencies if needed and run the server (default)
    Start,

    /// Show the resolved install layout
    Paths {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that the runtime and package manager are installed
    CheckDeps,
}
